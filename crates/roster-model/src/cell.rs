//! Spreadsheet cell values.

use chrono::NaiveDateTime;

/// Display format used for date-time cells when rendered as text.
pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single typed spreadsheet cell as read from the source workbook.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Render the cell the way it reads in the sheet.
    ///
    /// Whole floats print without a fractional part so numeric phone and
    /// RUT columns survive as digit strings.
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(value) => value.clone(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => format_float(*value),
            Self::Bool(value) => value.to_string(),
            Self::DateTime(value) => value.format(DATETIME_DISPLAY_FORMAT).to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(value) => value.trim().is_empty(),
            _ => false,
        }
    }
}

fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn whole_floats_render_as_integers() {
        assert_eq!(Cell::Float(56987654321.0).to_text(), "56987654321");
        assert_eq!(Cell::Float(1.5).to_text(), "1.5");
        assert_eq!(Cell::Int(42).to_text(), "42");
    }

    #[test]
    fn datetime_renders_with_seconds() {
        let value = NaiveDate::from_ymd_opt(2023, 1, 8)
            .and_then(|date| date.and_hms_opt(9, 5, 30))
            .expect("valid datetime");
        assert_eq!(Cell::DateTime(value).to_text(), "2023-01-08 09:05:30");
    }

    #[test]
    fn blank_text_counts_as_empty() {
        assert!(Cell::Empty.is_empty());
        assert!(Cell::text("   ").is_empty());
        assert!(!Cell::text("x").is_empty());
        assert!(!Cell::Int(0).is_empty());
    }
}
