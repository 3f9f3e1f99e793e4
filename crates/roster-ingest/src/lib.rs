pub mod error;
pub mod workbook;

pub use error::{IngestError, Result};
pub use workbook::{SUPPORTED_EXTENSIONS, load_source_table, read_workbook};
