//! Discovery of the courses named in the survey.
//!
//! Course names are free text. They are compared by exact trimmed string
//! equality, so a misspelled course produces its own roster.

use std::collections::BTreeSet;

use roster_model::SourceRecord;

/// Split a comma-separated course field into trimmed, non-empty names.
pub fn split_courses(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|course| !course.is_empty())
}

/// Every distinct course named by any record, rejected ones included.
pub fn discover(records: &[SourceRecord]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|record| split_courses(&record.courses))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(courses: &str) -> SourceRecord {
        SourceRecord {
            index: 0,
            timestamp: String::new(),
            names: String::new(),
            surnames: String::new(),
            rut: String::new(),
            email: String::new(),
            institution: String::new(),
            phone: String::new(),
            courses: courses.to_string(),
            cells: Vec::new(),
        }
    }

    #[test]
    fn tokens_are_trimmed_and_blank_ones_dropped() {
        let tokens: Vec<&str> = split_courses(" Excel ,Word,, ,PowerPoint ").collect();
        assert_eq!(tokens, vec!["Excel", "Word", "PowerPoint"]);
        assert_eq!(split_courses("").count(), 0);
    }

    #[test]
    fn courses_are_unioned_across_records() {
        let records = vec![record("Excel, Word"), record("Word"), record(""), record("excel")];
        let courses = discover(&records);
        let names: Vec<&str> = courses.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["Excel", "Word", "excel"]);
    }
}
