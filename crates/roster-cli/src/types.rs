use std::path::PathBuf;

use roster_core::DataQualityWarning;
use roster_report::ExportReport;

/// Everything the summary needs to know about one run.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Discovered courses in roster order.
    pub courses: Vec<String>,
    pub records: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub warnings: Vec<DataQualityWarning>,
    pub export: ExportReport,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        self.export.has_failures()
    }
}
