//! Enrollment report generation.
//!
//! This crate persists the result of an enrollment run:
//!
//! - **Rosters**: one UTF-8 (with BOM) CSV per course
//! - **Normalized workbook**: the source sheet with canonical field values
//! - **Invalid RUT log**: a text file listing every rejected record
//!
//! [`export_outcome`] drives any [`ReportSink`]; [`FsReportSink`] writes to a
//! directory on disk.

mod error;
mod fs;
mod invalid_log;
mod roster_csv;
mod sink;
mod workbook;

pub use error::{ExportError, Result};
pub use fs::{FsReportSink, ReportOptions, roster_file_name};
pub use invalid_log::{format_invalid_entry, invalid_log_banner};
pub use roster_csv::write_roster_csv;
pub use sink::{ExportFailure, ExportReport, ReportSink, RosterExport, export_outcome};
pub use workbook::write_normalized_workbook;
