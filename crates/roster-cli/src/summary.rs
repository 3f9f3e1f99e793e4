use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Source: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    print_courses(&result.courses);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Course"),
        header_cell("Enrolled"),
        header_cell("CSV"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);

    let mut total = 0usize;
    for roster in &result.export.rosters {
        total += roster.rows;
        table.add_row(vec![
            Cell::new(&roster.course).fg(Color::Cyan),
            count_cell(roster.rows),
            output_cell(roster.path.as_deref()),
            file_cell(roster.path.as_deref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    println!("Records: {}", result.records);
    println!("Accepted: {}", result.accepted);
    println!("Rejected (invalid RUT): {}", result.rejected);
    println!("Warnings: {}", result.warnings.len());
    if let Some(path) = &result.export.invalid_log {
        println!("Invalid RUT log: {}", path.display());
    }
    if let Some(path) = &result.export.normalized_table {
        println!("Normalized workbook: {}", path.display());
    }
    if result.has_errors() {
        eprintln!("Errors:");
        for failure in &result.export.failures {
            eprintln!("- {}: {}", failure.artifact, failure.message);
        }
    }
}

fn print_courses(courses: &[String]) {
    if courses.is_empty() {
        println!("No courses detected.");
        return;
    }
    println!("Courses detected:");
    for course in courses {
        println!("  - {course}");
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn output_cell(path: Option<&Path>) -> Cell {
    match path {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold),
    }
}

fn file_cell(path: Option<&Path>) -> Cell {
    match path.and_then(Path::file_name) {
        Some(name) => Cell::new(name.to_string_lossy()),
        None => dim_cell("-"),
    }
}
