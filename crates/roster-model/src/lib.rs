pub mod cell;
pub mod columns;
pub mod error;
pub mod invalid_log;
pub mod record;
pub mod roster;

pub use cell::Cell;
pub use columns::{ColumnLayout, ROSTER_HEADERS};
pub use error::{ModelError, Result};
pub use invalid_log::{InvalidRutEntry, InvalidRutLog};
pub use record::{NormalizedRecord, NormalizedTable, SourceRecord, SourceRow, SourceTable};
pub use roster::{Credentials, CourseRoster, EnrollmentRow, STUDENT_ROLE};
