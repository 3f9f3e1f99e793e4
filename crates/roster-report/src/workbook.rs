//! Normalized master table as an `.xlsx` workbook.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use roster_model::{Cell, NormalizedTable};

use crate::error::{ExportError, Result};

const DATETIME_NUM_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Write `table` to a single-sheet workbook at `path`.
pub fn write_normalized_workbook(path: &Path, table: &NormalizedTable) -> Result<()> {
    let xlsx_error = |source| ExportError::Xlsx {
        path: path.to_path_buf(),
        source,
    };
    let datetime_format = Format::new().set_num_format(DATETIME_NUM_FORMAT);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in table.headers.iter().enumerate() {
        sheet
            .write_string(0, column_number(col)?, header)
            .map_err(xlsx_error)?;
    }
    for (idx, row) in table.rows.iter().enumerate() {
        let row_num = u32::try_from(idx + 1).map_err(|_| ExportError::Layout {
            message: format!("row {idx} out of range"),
        })?;
        for (col, cell) in row.iter().enumerate() {
            let col_num = column_number(col)?;
            let written = match cell {
                Cell::Empty => continue,
                Cell::Text(text) => sheet.write_string(row_num, col_num, text),
                Cell::Int(number) => sheet.write_number(row_num, col_num, *number as f64),
                Cell::Float(number) => sheet.write_number(row_num, col_num, *number),
                Cell::Bool(flag) => sheet.write_boolean(row_num, col_num, *flag),
                Cell::DateTime(value) => {
                    sheet.write_datetime_with_format(row_num, col_num, value, &datetime_format)
                }
            };
            written.map_err(xlsx_error)?;
        }
    }

    workbook.save(path).map_err(xlsx_error)?;
    Ok(())
}

fn column_number(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| ExportError::Layout {
        message: format!("column {col} out of range"),
    })
}
