//! Enrollment processing for survey exports.
//!
//! [`run_enrollment`] walks a [`SourceTable`](roster_model::SourceTable) in
//! sheet order, rejects records with an invalid RUT, normalizes the rest and
//! fans each accepted record out into the rosters of the courses it lists.

pub mod course_index;
pub mod issues;
pub mod options;
pub mod pipeline;

pub use course_index::{discover, split_courses};
pub use issues::{DataQualityWarning, WarningKind};
pub use options::PipelineOptions;
pub use pipeline::{EnrollmentOutcome, EnrollmentPipeline, RecordStatus, run_enrollment};
