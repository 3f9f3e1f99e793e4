//! CLI argument definitions for the roster builder.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Build per-course enrollment rosters from a survey spreadsheet",
    long_about = "Build per-course enrollment rosters from a survey spreadsheet.\n\n\
                  Validates every RUT, normalizes names, phones and emails, and writes\n\
                  one CSV roster per course plus a normalized copy of the sheet.\n\n\
                  Environment:\n  \
                  ROSTER_OUTPUT_DIR   output directory (default: output)\n  \
                  ROSTER_LOG_FORMAT   pretty, compact or json\n  \
                  RUST_LOG            log filter (default: info)"
)]
pub struct Cli {
    /// Path to the spreadsheet. Unquoted paths containing spaces are joined back together.
    #[arg(
        value_name = "PATH",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub path: Vec<String>,
}

impl Cli {
    /// The input path, or `None` when no words were given.
    pub fn input_path(&self) -> Option<PathBuf> {
        let joined = self.path.join(" ");
        if joined.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(joined))
        }
    }
}
