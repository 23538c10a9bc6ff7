//! Personal income tax calculations.
//!
//! This module provides the calculator itself along with the money helpers
//! and summary rendering it relies on.

pub mod common;
pub mod income_tax;
pub mod summary;

pub use income_tax::{Deductions, IncomeTaxCalculator, TaxAssessment};
pub use summary::{TaxSummary, format_summary};
