//! Human-readable tax summary.

use std::fmt;

use crate::TaxpayerRecord;
use crate::calculations::common::format_currency;
use crate::calculations::income_tax::{IncomeTaxCalculator, TaxAssessment};

/// Currency prefix used in printed amounts.
pub const CURRENCY_PREFIX: &str = "Nu.";

/// A record paired with its assessment, rendered one item per line.
#[derive(Debug, Clone, Copy)]
pub struct TaxSummary<'a> {
    record: &'a TaxpayerRecord,
    assessment: TaxAssessment,
}

impl<'a> TaxSummary<'a> {
    pub fn new(
        record: &'a TaxpayerRecord,
        assessment: TaxAssessment,
    ) -> Self {
        Self { record, assessment }
    }

    pub fn record(&self) -> &'a TaxpayerRecord {
        self.record
    }

    pub fn assessment(&self) -> &TaxAssessment {
        &self.assessment
    }
}

impl fmt::Display for TaxSummary<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let a = &self.assessment;
        writeln!(f, "Name: {}", self.record.name)?;
        writeln!(f, "Income: {CURRENCY_PREFIX} {}", format_currency(self.record.income))?;
        writeln!(
            f,
            "Taxable Income: {CURRENCY_PREFIX} {}",
            format_currency(a.taxable_income)
        )?;
        writeln!(f, "Income Tax: {CURRENCY_PREFIX} {}", format_currency(a.base_tax))?;
        writeln!(
            f,
            "Surcharge (if applicable): {CURRENCY_PREFIX} {}",
            format_currency(a.surcharge)
        )?;
        write!(
            f,
            "Total Tax Payable: {CURRENCY_PREFIX} {}",
            format_currency(a.total_tax)
        )
    }
}

/// Assesses `record` and renders the summary as text.
pub fn format_summary(record: &TaxpayerRecord) -> String {
    IncomeTaxCalculator::new().summary(record).to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::OrganizationType;

    #[test]
    fn format_summary_contract_employee() {
        let record =
            TaxpayerRecord::new("Pema Wangmo", dec!(1000000), true, OrganizationType::Private, 2)
                .unwrap();

        let text = format_summary(&record);

        assert_eq!(
            text,
            "Name: Pema Wangmo\n\
             Income: Nu. 1,000,000.00\n\
             Taxable Income: Nu. 880,000.00\n\
             Income Tax: Nu. 98,500.00\n\
             Surcharge (if applicable): Nu. 0.00\n\
             Total Tax Payable: Nu. 98,500.00"
        );
    }

    #[test]
    fn format_summary_shows_surcharge() {
        let record =
            TaxpayerRecord::new("Tashi", dec!(5000000), false, OrganizationType::Corporate, 0)
                .unwrap();

        let text = format_summary(&record);

        assert!(text.contains("Surcharge (if applicable): Nu. 123,000.00"));
        assert!(text.ends_with("Total Tax Payable: Nu. 1,353,000.00"));
    }

    #[test]
    fn summary_exposes_record_and_assessment() {
        let record =
            TaxpayerRecord::new("Sonam", dec!(500000), false, OrganizationType::Government, 0)
                .unwrap();

        let summary = IncomeTaxCalculator::new().summary(&record);

        assert_eq!(summary.record().name, "Sonam");
        assert_eq!(summary.assessment().base_tax, dec!(19300));
    }
}
