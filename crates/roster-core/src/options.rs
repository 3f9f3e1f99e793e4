//! Configuration options for enrollment processing.

use roster_model::STUDENT_ROLE;
use roster_normalization::MIN_PHONE_LENGTH;

/// Options controlling how records are checked and enrolled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Role code written to every roster row.
    pub role: u8,

    /// Normalized phones shorter than this raise a warning.
    pub min_phone_length: usize,

    /// Raw values treated as empty besides whitespace, compared
    /// case-insensitively. Spreadsheet exports write `nan` for blank cells.
    pub placeholder_values: Vec<String>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            role: STUDENT_ROLE,
            min_phone_length: MIN_PHONE_LENGTH,
            placeholder_values: vec!["nan".to_string()],
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: u8) -> Self {
        self.role = role;
        self
    }

    pub fn with_min_phone_length(mut self, length: usize) -> Self {
        self.min_phone_length = length;
        self
    }

    /// Whether `value` is blank or one of the placeholder values.
    pub fn is_placeholder(&self, value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || self
                .placeholder_values
                .iter()
                .any(|placeholder| placeholder.eq_ignore_ascii_case(trimmed))
    }
}
