//! Export orchestration over an abstract sink.

use std::path::PathBuf;

use tracing::{error, info, info_span};

use roster_core::EnrollmentOutcome;
use roster_model::{EnrollmentRow, InvalidRutEntry, NormalizedTable};

use crate::error::{ExportError, Result};

/// Destination for the artifacts of an enrollment run.
pub trait ReportSink {
    /// Append one rejected record to the invalid RUT log.
    fn append_invalid_log(&mut self, entry: &InvalidRutEntry) -> Result<PathBuf>;

    /// Persist the roster of `course`.
    fn write_roster(&mut self, course: &str, rows: &[EnrollmentRow]) -> Result<PathBuf>;

    /// Persist the normalized master table.
    fn write_normalized_table(&mut self, table: &NormalizedTable) -> Result<PathBuf>;
}

/// An artifact that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    pub artifact: String,
    pub message: String,
}

/// Result of exporting one roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterExport {
    pub course: String,
    pub rows: usize,
    pub path: Option<PathBuf>,
}

/// What was written and what failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub invalid_log: Option<PathBuf>,
    pub rosters: Vec<RosterExport>,
    pub normalized_table: Option<PathBuf>,
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    fn fail(&mut self, artifact: impl Into<String>, err: &ExportError) {
        let artifact = artifact.into();
        error!(artifact = %artifact, error = %err, "export failed");
        self.failures.push(ExportFailure {
            artifact,
            message: err.to_string(),
        });
    }
}

/// Write every artifact of `outcome` to `sink`.
///
/// Order: invalid RUT log entries, rosters by course name, normalized table.
/// A failing artifact is recorded and the remaining ones are still written.
pub fn export_outcome(sink: &mut dyn ReportSink, outcome: &EnrollmentOutcome) -> ExportReport {
    let span = info_span!("export");
    let _guard = span.enter();
    let mut report = ExportReport::default();

    for entry in outcome.invalid_log.entries() {
        match sink.append_invalid_log(entry) {
            Ok(path) => report.invalid_log = Some(path),
            Err(err) => report.fail(format!("invalid RUT log (row {})", entry.row), &err),
        }
    }

    for (course, roster) in &outcome.rosters {
        let path = match sink.write_roster(course, roster.rows()) {
            Ok(path) => {
                info!(course = %course, rows = roster.len(), path = %path.display(), "roster written");
                Some(path)
            }
            Err(err) => {
                report.fail(format!("roster {course}"), &err);
                None
            }
        };
        report.rosters.push(RosterExport {
            course: course.clone(),
            rows: roster.len(),
            path,
        });
    }

    match sink.write_normalized_table(&outcome.normalized_table) {
        Ok(path) => {
            info!(
                rows = outcome.normalized_table.rows.len(),
                path = %path.display(),
                "normalized table written"
            );
            report.normalized_table = Some(path);
        }
        Err(err) => report.fail("normalized table", &err),
    }

    report
}
