pub mod app;
pub mod logging;
pub mod prompt;
pub mod utils;

pub use prompt::{Prompter, RecordInput};
