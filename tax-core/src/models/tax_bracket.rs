use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One band of the progressive income tax schedule.
///
/// Tax for an income inside the band is
/// `base_tax + (income - min_income) * tax_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    /// Accumulated tax of all lower bands.
    pub base_tax: Decimal,
}

impl TaxBracket {
    const fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        tax_rate: Decimal,
        base_tax: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            tax_rate,
            base_tax,
        }
    }

    /// Returns true when `taxable_income` falls in this band.
    ///
    /// The lower bound is exclusive and the upper bound inclusive, so an
    /// amount sitting on a boundary is taxed by the lower band.
    pub fn contains(
        &self,
        taxable_income: Decimal,
    ) -> bool {
        taxable_income > self.min_income
            && self.max_income.is_none_or(|max| taxable_income <= max)
    }

    /// Tax owed for an income inside this band.
    pub fn tax_for(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        self.base_tax + (taxable_income - self.min_income) * self.tax_rate
    }
}

/// The fixed personal income tax schedule, lowest band first.
pub static INCOME_TAX_SCHEDULE: [TaxBracket; 6] = [
    TaxBracket::new(dec!(0), Some(dec!(300000)), dec!(0), dec!(0)),
    TaxBracket::new(dec!(300000), Some(dec!(400000)), dec!(0.10), dec!(0)),
    TaxBracket::new(dec!(400000), Some(dec!(650000)), dec!(0.15), dec!(10000)),
    TaxBracket::new(dec!(650000), Some(dec!(1000000)), dec!(0.20), dec!(52500)),
    TaxBracket::new(dec!(1000000), Some(dec!(1500000)), dec!(0.25), dec!(130000)),
    TaxBracket::new(dec!(1500000), None, dec!(0.30), dec!(255000)),
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn schedule_bands_are_contiguous() {
        for pair in INCOME_TAX_SCHEDULE.windows(2) {
            assert_eq!(pair[0].max_income, Some(pair[1].min_income));
        }
        assert_eq!(INCOME_TAX_SCHEDULE[5].max_income, None);
    }

    #[test]
    fn schedule_base_tax_accumulates_lower_bands() {
        for pair in INCOME_TAX_SCHEDULE.windows(2) {
            let upper = pair[0].max_income.unwrap();

            assert_eq!(pair[0].tax_for(upper), pair[1].base_tax);
        }
    }

    #[test]
    fn contains_puts_upper_bound_in_lower_band() {
        let band = INCOME_TAX_SCHEDULE[1];

        assert!(band.contains(dec!(400000)));
        assert!(!band.contains(dec!(300000)));
        assert!(!band.contains(dec!(400000.01)));
    }

    #[test]
    fn contains_top_band_is_unbounded() {
        assert!(INCOME_TAX_SCHEDULE[5].contains(dec!(99999999999)));
    }
}
