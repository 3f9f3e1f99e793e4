//! Non-fatal data quality findings.
//!
//! Warnings never exclude a record; they are collected for the run summary
//! and emitted as `warn!` events as they occur.

use std::fmt;

/// What is wrong with an accepted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// A required field is blank or holds a placeholder.
    EmptyField { column: &'static str },
    /// The normalized phone is too short to be a full number.
    ShortPhone { phone: String },
}

/// A data quality warning raised for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQualityWarning {
    pub row: usize,
    pub timestamp: String,
    pub name: String,
    pub kind: WarningKind,
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::EmptyField { column } => write!(
                f,
                "field \"{column}\" is empty in record \"{}\" ({})",
                self.timestamp, self.name
            ),
            WarningKind::ShortPhone { phone } => write!(
                f,
                "invalid phone in record \"{}\" ({}): \"{phone}\"",
                self.timestamp, self.name
            ),
        }
    }
}
