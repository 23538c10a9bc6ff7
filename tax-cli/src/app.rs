//! One calculation from answers to printed report.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tax_core::calculations::common::format_currency;
use tax_core::calculations::summary::CURRENCY_PREFIX;
use tax_core::{IncomeTaxCalculator, TaxAssessment};
use tracing::info;

use crate::prompt::{Prompter, RecordInput};

/// Gathers a record, assesses it and writes the report to `writer`.
///
/// Prompts for missing fields go to the same writer. Returns the assessment
/// so callers and tests can inspect the numbers directly.
pub fn run<R: BufRead, W: Write>(
    input: RecordInput,
    reader: R,
    writer: W,
) -> Result<TaxAssessment> {
    let mut prompter = Prompter::new(reader, writer);
    let record = prompter
        .read_record(input)
        .context("invalid taxpayer details")?;
    let mut writer = prompter.into_writer();

    let calculator = IncomeTaxCalculator::new();
    let summary = calculator.summary(&record);
    let assessment = *summary.assessment();

    info!(
        taxpayer = %record.name,
        organization = %record.organization_type,
        total_tax = %assessment.total_tax,
        "calculated income tax"
    );

    writeln!(
        writer,
        "Taxable income is {CURRENCY_PREFIX} {}",
        format_currency(assessment.taxable_income)
    )?;
    writeln!(
        writer,
        "{} has to pay total tax of {CURRENCY_PREFIX} {}",
        record.name,
        format_currency(assessment.total_tax)
    )?;
    writeln!(writer)?;
    writeln!(writer, "{summary}")?;
    writer.flush()?;

    Ok(assessment)
}
