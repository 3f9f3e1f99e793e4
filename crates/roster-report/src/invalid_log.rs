//! Text layout of the invalid RUT log.

use roster_model::InvalidRutEntry;

const RULE_WIDTH: usize = 80;
const TITLE: &str = "Registro de ruts inválidos";
const ENTRY_LABEL: &str = "Rut Inválido";

/// Header written once, when the log file is created.
pub fn invalid_log_banner() -> String {
    let rule = "*".repeat(RULE_WIDTH);
    format!("{rule}\n\t{TITLE}\n{rule}\n\n")
}

/// One block per rejected record: the raw RUT, then every source column.
pub fn format_invalid_entry(entry: &InvalidRutEntry) -> String {
    let mut block = format!("\n\n\n\n{ENTRY_LABEL}: {}", entry.raw_rut);
    for (column, value) in &entry.fields {
        block.push_str(&format!("\n  {column} : {value}"));
    }
    block
}
