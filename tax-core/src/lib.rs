pub mod calculations;
pub mod models;

pub use calculations::{IncomeTaxCalculator, TaxAssessment, format_summary};
pub use models::*;
