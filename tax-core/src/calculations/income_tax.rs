//! Personal income tax assessment.
//!
//! An assessment runs in four steps:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Role deduction: 7.6% (government), 2% (contract) or 5% (everyone else) of income |
//! | 2    | Child deduction: Nu. 350,000 per child, capped at 10% of income |
//! | 3    | Taxable income: income minus both deductions, never below zero |
//! | 4    | Base tax from the progressive schedule, plus a 10% surcharge once the base tax reaches Nu. 1,000,000 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::IncomeTaxCalculator;
//! use tax_core::{OrganizationType, TaxpayerRecord};
//!
//! let record = TaxpayerRecord::new(
//!     "Pema",
//!     dec!(1000000),
//!     true,
//!     OrganizationType::Private,
//!     2,
//! )
//! .unwrap();
//!
//! let assessment = IncomeTaxCalculator::new().calculate(&record);
//!
//! assert_eq!(assessment.taxable_income, dec!(880000));
//! assert_eq!(assessment.base_tax, dec!(98500));
//! assert_eq!(assessment.surcharge, dec!(0));
//! assert_eq!(assessment.total_tax, dec!(98500));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{max, min, round_half_up};
use crate::calculations::summary::TaxSummary;
use crate::{INCOME_TAX_SCHEDULE, OrganizationType, TaxBracket, TaxpayerRecord};

/// Provident fund and group insurance rate for government employees.
pub const GOVERNMENT_DEDUCTION_RATE: Decimal = dec!(0.076);

/// Group insurance rate for contract employees.
pub const CONTRACT_DEDUCTION_RATE: Decimal = dec!(0.02);

/// Provident fund rate for private and corporate employees.
pub const STANDARD_DEDUCTION_RATE: Decimal = dec!(0.05);

/// Deduction allowed per dependent child.
pub const CHILD_DEDUCTION_PER_CHILD: Decimal = dec!(350000);

/// Child deductions may not exceed this share of income.
pub const CHILD_DEDUCTION_CAP_RATE: Decimal = dec!(0.10);

/// Base tax at or above which the surcharge applies.
pub const SURCHARGE_THRESHOLD: Decimal = dec!(1000000);

pub const SURCHARGE_RATE: Decimal = dec!(0.10);

/// Breakdown of the deductions applied to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Deduction tied to the employment role.
    pub role_deduction: Decimal,
    pub child_deduction: Decimal,
    pub total: Decimal,
}

/// Result of assessing one [`TaxpayerRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    pub deductions: Deductions,

    /// Income after deductions, floored at zero.
    pub taxable_income: Decimal,

    /// Tax from the progressive schedule.
    pub base_tax: Decimal,

    /// Surcharge on large tax bills (zero when not applicable).
    pub surcharge: Decimal,

    /// `base_tax + surcharge`.
    pub total_tax: Decimal,
}

/// Calculator for personal income tax.
///
/// Every method is a pure function of its arguments; the calculator holds
/// only the bracket schedule.
#[derive(Debug, Clone)]
pub struct IncomeTaxCalculator {
    tax_brackets: &'static [TaxBracket],
}

impl Default for IncomeTaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl IncomeTaxCalculator {
    /// Creates a calculator over the fixed income tax schedule.
    pub fn new() -> Self {
        Self {
            tax_brackets: &INCOME_TAX_SCHEDULE,
        }
    }

    /// Assesses a record: deductions, taxable income, base tax, surcharge
    /// and total.
    pub fn calculate(
        &self,
        record: &TaxpayerRecord,
    ) -> TaxAssessment {
        let deductions = self.deductions(record);
        let taxable_income = self.taxable_income_after(record.income, &deductions);
        // The surcharge threshold is checked against the unrounded tax.
        let exact_tax = self.schedule_tax(taxable_income);
        let base_tax = round_half_up(exact_tax);
        let surcharge = self.surcharge(exact_tax);
        let total_tax = base_tax + surcharge;

        debug!(
            taxpayer = %record.name,
            %taxable_income,
            %base_tax,
            %surcharge,
            %total_tax,
            "assessed income tax"
        );

        TaxAssessment {
            deductions,
            taxable_income,
            base_tax,
            surcharge,
            total_tax,
        }
    }

    /// Works out the role and child deductions for a record.
    ///
    /// The role deduction is chosen by the first matching rule: government
    /// employees, then contract employees, then everyone else.
    pub fn deductions(
        &self,
        record: &TaxpayerRecord,
    ) -> Deductions {
        let role_rate = match (record.organization_type, record.is_contract_employee) {
            (OrganizationType::Government, _) => GOVERNMENT_DEDUCTION_RATE,
            (OrganizationType::Private | OrganizationType::Corporate, true) => {
                CONTRACT_DEDUCTION_RATE
            }
            (OrganizationType::Private | OrganizationType::Corporate, false) => {
                STANDARD_DEDUCTION_RATE
            }
        };
        let role_deduction = round_half_up(record.income * role_rate);

        let child_deduction = round_half_up(min(
            Decimal::from(record.number_of_children) * CHILD_DEDUCTION_PER_CHILD,
            record.income * CHILD_DEDUCTION_CAP_RATE,
        ));

        Deductions {
            role_deduction,
            child_deduction,
            total: role_deduction + child_deduction,
        }
    }

    /// Income left after deductions, never negative.
    pub fn taxable_income(
        &self,
        record: &TaxpayerRecord,
    ) -> Decimal {
        let deductions = self.deductions(record);
        self.taxable_income_after(record.income, &deductions)
    }

    fn taxable_income_after(
        &self,
        income: Decimal,
        deductions: &Deductions,
    ) -> Decimal {
        max(round_half_up(income - deductions.total), Decimal::ZERO)
    }

    /// Applies the progressive schedule to a taxable income, rounded to cents.
    pub fn base_tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        round_half_up(self.schedule_tax(taxable_income))
    }

    fn schedule_tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        self.tax_brackets
            .iter()
            .find(|b| b.contains(taxable_income))
            .map_or(Decimal::ZERO, |b| b.tax_for(taxable_income))
    }

    /// Surcharge owed on a base tax amount.
    ///
    /// Keyed on the tax itself, not on income. Pass the unrounded tax: an
    /// amount just under the threshold must not be lifted over it by rounding.
    pub fn surcharge(
        &self,
        base_tax: Decimal,
    ) -> Decimal {
        if base_tax >= SURCHARGE_THRESHOLD {
            round_half_up(base_tax * SURCHARGE_RATE)
        } else {
            Decimal::ZERO
        }
    }

    /// Total tax payable for a record (base tax plus surcharge).
    pub fn total_tax(
        &self,
        record: &TaxpayerRecord,
    ) -> Decimal {
        self.calculate(record).total_tax
    }

    /// Assesses a record and pairs it with the result for display.
    pub fn summary<'a>(
        &self,
        record: &'a TaxpayerRecord,
    ) -> TaxSummary<'a> {
        TaxSummary::new(record, self.calculate(record))
    }
}
