use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use roster_core::{PipelineOptions, run_enrollment};
use roster_ingest::load_source_table;
use roster_report::{FsReportSink, ReportOptions, export_outcome};

use crate::types::RunResult;

/// Environment variable overriding the output directory.
pub const OUTPUT_DIR_ENV: &str = "ROSTER_OUTPUT_DIR";

/// Options for one invocation of the command.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub pipeline: PipelineOptions,
    pub report: ReportOptions,
}

impl RunConfig {
    /// Defaults, with the output directory taken from `ROSTER_OUTPUT_DIR` when set.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = env::var_os(OUTPUT_DIR_ENV).filter(|value| !value.is_empty()) {
            config.report = config.report.with_output_dir(PathBuf::from(dir));
        }
        config
    }
}

/// Read `input`, enroll every valid record and write the reports.
///
/// Export failures are collected in the result; only unreadable input, a
/// missing column or an uncreatable output directory abort the run.
pub fn run(input: &Path, config: &RunConfig) -> Result<RunResult> {
    let span = info_span!("run", input = %input.display());
    let _guard = span.enter();

    info!("reading source document");
    let table = load_source_table(input)
        .with_context(|| format!("read source document {}", input.display()))?;

    info!(rows = table.len(), "processing records");
    let outcome = run_enrollment(&table, &config.pipeline).context("process records")?;
    let courses: Vec<String> = outcome.rosters.keys().cloned().collect();

    let mut sink = FsReportSink::new(config.report.clone()).context("prepare output directory")?;
    let export = export_outcome(&mut sink, &outcome);
    info!(
        accepted = outcome.accepted(),
        rejected = outcome.rejected(),
        failures = export.failures.len(),
        "finished"
    );

    Ok(RunResult {
        input: input.to_path_buf(),
        output_dir: sink.output_dir().to_path_buf(),
        courses,
        records: table.len(),
        accepted: outcome.accepted(),
        rejected: outcome.rejected(),
        warnings: outcome.warnings,
        export,
    })
}
