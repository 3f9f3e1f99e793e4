//! Workbook loading.
//!
//! The first worksheet is read; its first non-empty row is the header and
//! every following non-empty row becomes a [`SourceRow`](roster_model::SourceRow).

use std::fs::File;
use std::io;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, info};

use roster_model::{Cell, SourceTable};

use crate::error::{IngestError, Result};

/// Spreadsheet extensions the reader understands.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Read the first worksheet of `path` into a [`SourceTable`].
pub fn read_workbook(path: &Path) -> Result<SourceTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    // Probe with a plain open so permission problems are not reported as
    // format errors by the workbook parser.
    File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::PermissionDenied {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut workbook =
        open_workbook_auto(path).map_err(|error| IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|error| IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let mut rows = range
        .rows()
        .filter(|row| !row.iter().all(|value| matches!(value, Data::Empty)));
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|value| normalize_header(&to_cell(value).to_text()))
        .collect();
    debug!(columns = headers.len(), "header row detected");

    let mut table = SourceTable::new(headers);
    for row in rows {
        table.push_row(row.iter().map(to_cell).collect());
    }
    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "workbook loaded"
    );
    Ok(table)
}

/// Read `path` and check that every survey column is present.
pub fn load_source_table(path: &Path) -> Result<SourceTable> {
    let table = read_workbook(path)?;
    table.layout().map_err(|source| IngestError::Schema {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(table)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn to_cell(value: &Data) -> Cell {
    match value {
        Data::Empty => Cell::Empty,
        Data::String(text) => Cell::Text(text.clone()),
        Data::Int(number) => Cell::Int(*number),
        Data::Float(number) => Cell::Float(*number),
        Data::Bool(flag) => Cell::Bool(*flag),
        Data::DateTime(value) => value
            .as_datetime()
            .map_or_else(|| Cell::Float(value.as_f64()), Cell::DateTime),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Cell::Text(text.clone()),
        Data::Error(error) => Cell::Text(error.to_string()),
    }
}
