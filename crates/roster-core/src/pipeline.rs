//! Per-record validation, normalization and roster fan-out.
//!
//! Each record ends in one of two states:
//!
//! 1. **Rejected**: the RUT fails its checksum. The record is appended to the
//!    [`InvalidRutLog`] and left out of the normalized table.
//! 2. **Accepted**: blank fields and short phones are reported, the fields
//!    are normalized and a credential row is added to the roster of every
//!    course the record lists, once per username.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, info_span, warn};

use roster_model::columns::{INSTITUTION, NAMES, PHONE, SURNAMES};
use roster_model::{
    Cell, ColumnLayout, CourseRoster, EnrollmentRow, InvalidRutEntry, InvalidRutLog,
    NormalizedRecord, NormalizedTable, Result, SourceRecord, SourceTable,
};
use roster_normalization::{
    derive_credentials, normalize_email, normalize_institution, normalize_name, normalize_phone,
    normalize_surname, rut,
};

use crate::course_index::{discover, split_courses};
use crate::issues::{DataQualityWarning, WarningKind};
use crate::options::PipelineOptions;

/// Terminal state of a processed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    Accepted { username: String },
    Rejected,
}

/// Everything a run produces, ready for export.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentOutcome {
    /// Rosters keyed by course name, including courses nobody was accepted into.
    pub rosters: BTreeMap<String, CourseRoster>,
    /// Canonical values of the accepted records, in source order.
    pub normalized: Vec<NormalizedRecord>,
    /// The source table with normalized fields and rejected rows removed.
    pub normalized_table: NormalizedTable,
    pub invalid_log: InvalidRutLog,
    pub warnings: Vec<DataQualityWarning>,
}

impl EnrollmentOutcome {
    pub fn accepted(&self) -> usize {
        self.normalized.len()
    }

    pub fn rejected(&self) -> usize {
        self.invalid_log.len()
    }
}

/// Single pass enrollment state: owns the rosters and the invalid log.
#[derive(Debug)]
pub struct EnrollmentPipeline {
    headers: Vec<String>,
    layout: ColumnLayout,
    options: PipelineOptions,
    outcome: EnrollmentOutcome,
}

impl EnrollmentPipeline {
    /// Start a run with an empty roster for every course in `courses`.
    pub fn new(
        headers: Vec<String>,
        layout: ColumnLayout,
        courses: BTreeSet<String>,
        options: PipelineOptions,
    ) -> Self {
        let rosters = courses
            .into_iter()
            .map(|course| (course.clone(), CourseRoster::new(course)))
            .collect();
        let outcome = EnrollmentOutcome {
            rosters,
            normalized_table: NormalizedTable {
                headers: headers.clone(),
                rows: Vec::new(),
            },
            ..EnrollmentOutcome::default()
        };
        Self {
            headers,
            layout,
            options,
            outcome,
        }
    }

    pub fn rosters(&self) -> &BTreeMap<String, CourseRoster> {
        &self.outcome.rosters
    }

    /// Validate, normalize and enroll one record.
    pub fn process(&mut self, record: &SourceRecord) -> RecordStatus {
        let name = normalize_name(&record.names);

        if !rut::is_valid(&record.rut) {
            warn!(
                row = record.index,
                timestamp = %record.timestamp,
                name = %name.full,
                rut = %record.rut,
                "invalid RUT, record excluded"
            );
            let entry = self.invalid_entry(record);
            self.outcome.invalid_log.append(entry);
            return RecordStatus::Rejected;
        }

        for (column, value) in [
            (NAMES, &record.names),
            (SURNAMES, &record.surnames),
            (INSTITUTION, &record.institution),
            (PHONE, &record.phone),
        ] {
            if self.options.is_placeholder(value) {
                self.report(record, &name.full, WarningKind::EmptyField { column });
            }
        }

        let normalized = NormalizedRecord {
            index: record.index,
            rut: rut::normalize(&record.rut),
            phone: normalize_phone(&record.phone),
            email: normalize_email(&record.email),
            surnames: normalize_surname(&record.surnames),
            institution: normalize_institution(&record.institution),
            names: name.full,
            first_name: name.first,
        };
        if normalized.phone.chars().count() < self.options.min_phone_length {
            let phone = normalized.phone.clone();
            self.report(record, &normalized.names, WarningKind::ShortPhone { phone });
        }

        let credentials = derive_credentials(&normalized.rut);
        for course in split_courses(&record.courses) {
            let roster = self
                .outcome
                .rosters
                .entry(course.to_string())
                .or_insert_with(|| CourseRoster::new(course));
            let enrolled = roster.insert(EnrollmentRow {
                username: credentials.username.clone(),
                password: credentials.password.clone(),
                first_name: normalized.first_name.clone(),
                last_name: normalized.surnames.clone(),
                email: normalized.email.clone(),
                course: course.to_string(),
                role: self.options.role,
                institution: normalized.institution.clone(),
                rut: normalized.rut.clone(),
            });
            if !enrolled {
                debug!(
                    row = record.index,
                    course,
                    username = %credentials.username,
                    "already enrolled, skipping"
                );
            }
        }

        let row = normalized.apply_to(&self.layout, &record.cells);
        self.outcome.normalized_table.rows.push(row);
        self.outcome.normalized.push(normalized);
        RecordStatus::Accepted {
            username: credentials.username,
        }
    }

    pub fn finish(self) -> EnrollmentOutcome {
        self.outcome
    }

    fn report(&mut self, record: &SourceRecord, name: &str, kind: WarningKind) {
        let warning = DataQualityWarning {
            row: record.index,
            timestamp: record.timestamp.clone(),
            name: name.to_string(),
            kind,
        };
        warn!(row = record.index, "{warning}");
        self.outcome.warnings.push(warning);
    }

    fn invalid_entry(&self, record: &SourceRecord) -> InvalidRutEntry {
        let fields = self
            .headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = record.cells.get(idx).map(Cell::to_text).unwrap_or_default();
                (header.clone(), value)
            })
            .collect();
        InvalidRutEntry {
            row: record.index,
            timestamp: record.timestamp.clone(),
            raw_rut: record.rut.clone(),
            fields,
        }
    }
}

/// Run the whole table through the pipeline in sheet order.
///
/// Fails only when a required column is missing.
pub fn run_enrollment(table: &SourceTable, options: &PipelineOptions) -> Result<EnrollmentOutcome> {
    let span = info_span!("enrollment", rows = table.len());
    let _guard = span.enter();

    let layout = table.layout()?;
    let records = table.records()?;
    let courses = discover(&records);
    info!(
        course_count = courses.len(),
        courses = ?courses,
        "courses discovered"
    );

    let mut pipeline =
        EnrollmentPipeline::new(table.headers.clone(), layout, courses, options.clone());
    for record in &records {
        pipeline.process(record);
    }
    let outcome = pipeline.finish();
    info!(
        accepted = outcome.accepted(),
        rejected = outcome.rejected(),
        warnings = outcome.warnings.len(),
        "enrollment complete"
    );
    Ok(outcome)
}
