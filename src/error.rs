use thiserror::Error;

use crate::report::SectionKind;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid date '{value}' on row {row}: expected day-first (dd/mm/yyyy)")]
    InvalidDate { row: usize, value: String },

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Invalid value '{value}' in column '{column}' on row {row}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("No data for {section}: {reason}")]
    EmptyResult { section: SectionKind, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

impl ReportError {
    /// Errors caused by the input file itself, as opposed to I/O or output problems
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ReportError::Parse(_)
                | ReportError::InvalidDate { .. }
                | ReportError::MissingColumn(_)
                | ReportError::InvalidValue { .. }
                | ReportError::Csv(_)
        )
    }

    pub(crate) fn empty(section: SectionKind, reason: impl Into<String>) -> Self {
        ReportError::EmptyResult {
            section,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
