use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::OrganizationType;

/// Errors raised while building a [`TaxpayerRecord`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxpayerRecordError {
    #[error("income must not be negative, got {0}")]
    NegativeIncome(Decimal),
}

/// Everything needed to assess one taxpayer for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerRecord {
    /// Display name; not used by the calculation.
    pub name: String,
    /// Gross annual income.
    pub income: Decimal,
    pub is_contract_employee: bool,
    pub organization_type: OrganizationType,
    /// Number of dependent children.
    pub number_of_children: u32,
}

impl TaxpayerRecord {
    /// Builds a record, rejecting negative income.
    pub fn new(
        name: impl Into<String>,
        income: Decimal,
        is_contract_employee: bool,
        organization_type: OrganizationType,
        number_of_children: u32,
    ) -> Result<Self, TaxpayerRecordError> {
        if income < Decimal::ZERO {
            return Err(TaxpayerRecordError::NegativeIncome(income));
        }

        Ok(Self {
            name: name.into(),
            income,
            is_contract_employee,
            organization_type,
            number_of_children,
        })
    }
}
