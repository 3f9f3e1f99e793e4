//! Filesystem report sink.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use roster_model::{EnrollmentRow, InvalidRutEntry, NormalizedTable};

use crate::error::{ExportError, Result};
use crate::invalid_log::{format_invalid_entry, invalid_log_banner};
use crate::roster_csv::write_roster_csv;
use crate::sink::ReportSink;
use crate::workbook::write_normalized_workbook;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_NORMALIZED_FILE_NAME: &str = "archivo_normalizado.xlsx";
pub const DEFAULT_INVALID_LOG_FILE_NAME: &str = "ruts invalidos.txt";
const ROSTER_EXTENSION: &str = "csv";

/// Where and under which names the artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub output_dir: PathBuf,
    pub normalized_file_name: String,
    pub invalid_log_file_name: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            normalized_file_name: DEFAULT_NORMALIZED_FILE_NAME.to_string(),
            invalid_log_file_name: DEFAULT_INVALID_LOG_FILE_NAME.to_string(),
        }
    }
}

impl ReportOptions {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// File name of a course roster. Path separators in the course name are
/// replaced so every roster lands directly in the output directory.
pub fn roster_file_name(course: &str) -> String {
    let safe: String = course
        .chars()
        .map(|ch| if matches!(ch, '/' | '\\' | '\0') { '_' } else { ch })
        .collect();
    format!("{safe}.{ROSTER_EXTENSION}")
}

/// Writes every artifact under one output directory.
#[derive(Debug)]
pub struct FsReportSink {
    options: ReportOptions,
}

impl FsReportSink {
    /// Create the output directory if needed.
    pub fn new(options: ReportOptions) -> Result<Self> {
        fs::create_dir_all(&options.output_dir).map_err(|source| ExportError::CreateDir {
            path: options.output_dir.clone(),
            source,
        })?;
        Ok(Self { options })
    }

    pub fn output_dir(&self) -> &Path {
        &self.options.output_dir
    }

    pub fn invalid_log_path(&self) -> PathBuf {
        self.options
            .output_dir
            .join(&self.options.invalid_log_file_name)
    }

    pub fn normalized_table_path(&self) -> PathBuf {
        self.options
            .output_dir
            .join(&self.options.normalized_file_name)
    }

    pub fn roster_path(&self, course: &str) -> PathBuf {
        self.options.output_dir.join(roster_file_name(course))
    }
}

impl ReportSink for FsReportSink {
    /// The banner is written only when the log file does not exist yet, so
    /// entries from earlier runs are kept.
    fn append_invalid_log(&mut self, entry: &InvalidRutEntry) -> Result<PathBuf> {
        let path = self.invalid_log_path();
        let io_error = |source| ExportError::Io {
            path: path.clone(),
            source,
        };
        let is_new = !path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_error)?;
        if is_new {
            file.write_all(invalid_log_banner().as_bytes())
                .map_err(io_error)?;
        }
        file.write_all(format_invalid_entry(entry).as_bytes())
            .map_err(io_error)?;
        Ok(path)
    }

    fn write_roster(&mut self, course: &str, rows: &[EnrollmentRow]) -> Result<PathBuf> {
        let path = self.roster_path(course);
        let file = File::create(&path).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        write_roster_csv(BufWriter::new(file), rows).map_err(|source| ExportError::Csv {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    fn write_normalized_table(&mut self, table: &NormalizedTable) -> Result<PathBuf> {
        let path = self.normalized_table_path();
        write_normalized_workbook(&path, table)?;
        Ok(path)
    }
}
