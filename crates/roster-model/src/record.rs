//! Source survey rows and their normalized counterparts.

use crate::cell::Cell;
use crate::columns::ColumnLayout;
use crate::error::Result;

/// One row of the source sheet, identified by its position among data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    pub index: usize,
    pub cells: Vec<Cell>,
}

/// The source sheet: header row plus data rows in sheet order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<SourceRow>,
}

impl SourceTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a data row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut cells: Vec<Cell>) {
        cells.resize(self.headers.len(), Cell::Empty);
        let index = self.rows.len();
        self.rows.push(SourceRow { index, cells });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn layout(&self) -> Result<ColumnLayout> {
        ColumnLayout::resolve(&self.headers)
    }

    /// Extract the typed survey records, failing when a known column is absent.
    pub fn records(&self) -> Result<Vec<SourceRecord>> {
        let layout = self.layout()?;
        Ok(self
            .rows
            .iter()
            .map(|row| SourceRecord::from_row(&layout, row))
            .collect())
    }
}

/// A survey response with its known fields rendered as raw text.
///
/// The full original row is kept in `cells` so rejected records can be logged
/// field by field and accepted ones re-exported with every column.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    pub index: usize,
    pub timestamp: String,
    pub names: String,
    pub surnames: String,
    pub rut: String,
    pub email: String,
    pub institution: String,
    pub phone: String,
    pub courses: String,
    pub cells: Vec<Cell>,
}

impl SourceRecord {
    pub fn from_row(layout: &ColumnLayout, row: &SourceRow) -> Self {
        let text = |idx: usize| row.cells.get(idx).map(Cell::to_text).unwrap_or_default();
        Self {
            index: row.index,
            timestamp: text(layout.timestamp),
            names: text(layout.names),
            surnames: text(layout.surnames),
            rut: text(layout.rut),
            email: text(layout.email),
            institution: text(layout.institution),
            phone: text(layout.phone),
            courses: text(layout.courses),
            cells: row.cells.clone(),
        }
    }
}

/// Canonical field values for an accepted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub index: usize,
    pub names: String,
    pub first_name: String,
    pub surnames: String,
    pub rut: String,
    pub phone: String,
    pub email: String,
    pub institution: String,
}

impl NormalizedRecord {
    /// Produce the exported row: the original cells with the known fields
    /// replaced by their canonical values.
    ///
    /// A phone of at most 15 digits becomes a numeric cell.
    pub fn apply_to(&self, layout: &ColumnLayout, cells: &[Cell]) -> Vec<Cell> {
        let mut out = cells.to_vec();
        let width = [
            layout.names,
            layout.surnames,
            layout.rut,
            layout.phone,
            layout.email,
            layout.institution,
        ]
        .into_iter()
        .max()
        .map_or(0, |idx| idx + 1);
        if out.len() < width {
            out.resize(width, Cell::Empty);
        }
        out[layout.names] = Cell::text(&self.names);
        out[layout.surnames] = Cell::text(&self.surnames);
        out[layout.rut] = Cell::text(&self.rut);
        out[layout.email] = Cell::text(&self.email);
        out[layout.institution] = Cell::text(&self.institution);
        out[layout.phone] = phone_cell(&self.phone);
        out
    }
}

/// Longest digit string a spreadsheet number cell holds exactly.
const MAX_NUMERIC_PHONE_DIGITS: usize = 15;

fn phone_cell(phone: &str) -> Cell {
    if !phone.is_empty()
        && phone.len() <= MAX_NUMERIC_PHONE_DIGITS
        && phone.chars().all(|ch| ch.is_ascii_digit())
        && let Ok(value) = phone.parse::<i64>()
    {
        return Cell::Int(value);
    }
    Cell::text(phone)
}

/// The master table after normalization, rejected rows removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}
