//! Parsing of raw answers into validated field values.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tax_core::{OrganizationType, TaxpayerRecordError};
use thiserror::Error;

/// Reasons an answer is rejected before any calculation happens.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a number, got '{input}'")]
    NotANumber { field: &'static str, input: String },

    #[error("{field} must not be negative, got '{input}'")]
    Negative { field: &'static str, input: String },

    #[error("{field} is too large, got '{input}'")]
    OutOfRange { field: &'static str, input: String },

    #[error("{field} must be a whole number, got '{input}'")]
    NotAWholeNumber { field: &'static str, input: String },

    #[error("{field} must be yes or no, got '{input}'")]
    NotYesNo { field: &'static str, input: String },

    #[error("unknown organization type '{input}' (expected Government, Private or Corporate)")]
    UnknownOrganizationType { input: String },

    /// Raised by [`TaxpayerRecord::new`](tax_core::TaxpayerRecord::new).
    /// The field parsers reject the same inputs first, so this only fires
    /// if they are bypassed.
    #[error(transparent)]
    Record(#[from] TaxpayerRecordError),

    #[error("input ended before {field} was answered")]
    EndOfInput { field: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub const NAME: &str = "name";
pub const INCOME: &str = "income";
pub const CONTRACT_EMPLOYEE: &str = "contract employee";
pub const ORGANIZATION_TYPE: &str = "organization type";
pub const CHILDREN: &str = "number of children";

/// Digits with `,` between every group of three, e.g. `1,234,567.89`.
static GROUPED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d{1,3}(,\d{3})+(\.\d+)?$").expect("thousands pattern is valid")
});

/// Normalizes input for decimal parsing: trims whitespace and removes commas
/// (thousands separator). Returns `None` when commas are present but do not
/// separate groups of three digits, so `1,2,3` is not read as 123.
fn normalize_decimal_input(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if !trimmed.contains(',') {
        return Some(trimmed.to_string());
    }
    GROUPED_NUMBER
        .is_match(trimmed)
        .then(|| trimmed.replace(',', ""))
}

fn require<'a>(
    field: &'static str,
    s: &'a str,
) -> Result<&'a str, InputError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        tracing::warn!(field, "missing answer");
        return Err(InputError::Missing { field });
    }
    Ok(trimmed)
}

/// Parses a taxpayer name. Leading and trailing whitespace is dropped.
pub fn parse_name(s: &str) -> Result<String, InputError> {
    require(NAME, s).map(str::to_string)
}

/// Parses annual income.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty, non-numeric and negative input is rejected.
pub fn parse_income(s: &str) -> Result<Decimal, InputError> {
    require(INCOME, s)?;
    let not_a_number = || InputError::NotANumber {
        field: INCOME,
        input: s.trim().to_string(),
    };
    let normalized = normalize_decimal_input(s).ok_or_else(|| {
        tracing::error!(input = %s, "misplaced thousands separator in income");
        not_a_number()
    })?;
    let income: Decimal = normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid income: {}", e);
        not_a_number()
    })?;

    if income < Decimal::ZERO {
        return Err(InputError::Negative {
            field: INCOME,
            input: s.trim().to_string(),
        });
    }
    Ok(income)
}

/// Parses the number of dependent children.
///
/// A blank answer means no children. Negative and fractional counts are
/// rejected with their own errors so the message says what was wrong.
pub fn parse_children(s: &str) -> Result<u32, InputError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if let Ok(count) = trimmed.parse::<u32>() {
        return Ok(count);
    }

    let input = trimmed.to_string();
    match trimmed.parse::<Decimal>() {
        Ok(value) if value < Decimal::ZERO => Err(InputError::Negative {
            field: CHILDREN,
            input,
        }),
        Ok(value) if !value.fract().is_zero() => Err(InputError::NotAWholeNumber {
            field: CHILDREN,
            input,
        }),
        // "2.0" and friends
        Ok(value) => value.to_u32().ok_or(InputError::OutOfRange {
            field: CHILDREN,
            input,
        }),
        Err(e) => {
            tracing::error!(input = %s, "invalid number of children: {}", e);
            Err(InputError::NotANumber {
                field: CHILDREN,
                input,
            })
        }
    }
}

/// Parses a yes/no answer, ignoring case.
pub fn parse_yes_no(
    field: &'static str,
    s: &str,
) -> Result<bool, InputError> {
    let trimmed = require(field, s)?;
    match trimmed.to_ascii_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(InputError::NotYesNo {
            field,
            input: trimmed.to_string(),
        }),
    }
}

/// Parses an organization type (Government, Private or Corporate).
pub fn parse_organization_type(s: &str) -> Result<OrganizationType, InputError> {
    let trimmed = require(ORGANIZATION_TYPE, s)?;
    OrganizationType::parse(trimmed).ok_or_else(|| InputError::UnknownOrganizationType {
        input: trimmed.to_string(),
    })
}
