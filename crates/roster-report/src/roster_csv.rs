use std::io::Write;

use csv::WriterBuilder;

use roster_model::{EnrollmentRow, ROSTER_HEADERS};

/// Byte order mark so spreadsheet tools detect UTF-8.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write a roster as CSV: BOM, fixed header row, one line per enrollment.
///
/// The header is written even when the roster is empty.
pub fn write_roster_csv<W: Write>(mut writer: W, rows: &[EnrollmentRow]) -> csv::Result<()> {
    writer.write_all(UTF8_BOM)?;
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(ROSTER_HEADERS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
