//! Interactive collection of a [`TaxpayerRecord`].
//!
//! The prompter is generic over its reader and writer so the same code
//! drives a terminal session, a piped script, or an in-memory test.

use std::io::{BufRead, Write};

use tax_core::TaxpayerRecord;
use tracing::debug;

use crate::utils::{
    self, CHILDREN, CONTRACT_EMPLOYEE, INCOME, InputError, NAME, ORGANIZATION_TYPE,
};

const NAME_QUESTION: &str = "Enter individual's name: ";
const INCOME_QUESTION: &str = "Enter annual income (Nu.): ";
const CONTRACT_QUESTION: &str = "Is the individual a contract employee (Yes/No)? ";
const ORGANIZATION_QUESTION: &str = "Enter organization type (Government, Private, Corporate): ";
const CHILDREN_QUESTION: &str = "Enter the number of dependent children (if any): ";

/// Raw answers supplied up front, e.g. from command-line flags.
///
/// Any field left as `None` is asked for interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub name: Option<String>,
    pub income: Option<String>,
    pub contract_employee: Option<String>,
    pub organization_type: Option<String>,
    pub children: Option<String>,
}

impl RecordInput {
    /// True when every field is present and nothing needs to be asked.
    pub fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.income.is_some()
            && self.contract_employee.is_some()
            && self.organization_type.is_some()
            && self.children.is_some()
    }
}

/// Asks questions on `writer` and reads one answer per line from `reader`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(
        reader: R,
        writer: W,
    ) -> Self {
        Self { reader, writer }
    }

    /// Writes `question` and returns the next line without its line ending.
    pub fn ask(
        &mut self,
        field: &'static str,
        question: &str,
    ) -> Result<String, InputError> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput { field });
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn answer(
        &mut self,
        preset: Option<String>,
        field: &'static str,
        question: &str,
    ) -> Result<String, InputError> {
        match preset {
            Some(value) => {
                debug!(field, "using supplied answer");
                Ok(value)
            }
            None => self.ask(field, question),
        }
    }

    /// Collects and validates all five fields, stopping at the first bad one.
    pub fn read_record(
        &mut self,
        input: RecordInput,
    ) -> Result<TaxpayerRecord, InputError> {
        let name = utils::parse_name(&self.answer(input.name, NAME, NAME_QUESTION)?)?;
        let income = utils::parse_income(&self.answer(input.income, INCOME, INCOME_QUESTION)?)?;
        let is_contract_employee = utils::parse_yes_no(
            CONTRACT_EMPLOYEE,
            &self.answer(input.contract_employee, CONTRACT_EMPLOYEE, CONTRACT_QUESTION)?,
        )?;
        let organization_type = utils::parse_organization_type(&self.answer(
            input.organization_type,
            ORGANIZATION_TYPE,
            ORGANIZATION_QUESTION,
        )?)?;
        let number_of_children =
            utils::parse_children(&self.answer(input.children, CHILDREN, CHILDREN_QUESTION)?)?;

        Ok(TaxpayerRecord::new(
            name,
            income,
            is_contract_employee,
            organization_type,
            number_of_children,
        )?)
    }

    /// Hands back the writer so callers can keep printing to it.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
