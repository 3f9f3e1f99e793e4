//! Course rosters and the credential rows they hold.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Role code assigned to every enrolled person (student).
pub const STUDENT_ROLE: u8 = 5;

/// Synthetic login derived from a normalized RUT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// One credential row of a course roster, in roster column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRow {
    pub username: String,
    pub password: String,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "course1")]
    pub course: String,
    #[serde(rename = "role1")]
    pub role: u8,
    pub institution: String,
    #[serde(rename = "profile_field_RUT")]
    pub rut: String,
}

/// The enrollment table of a single course.
///
/// Rows keep insertion order; a username is accepted at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseRoster {
    course: String,
    rows: Vec<EnrollmentRow>,
    usernames: BTreeSet<String>,
}

impl CourseRoster {
    pub fn new(course: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            rows: Vec::new(),
            usernames: BTreeSet::new(),
        }
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn rows(&self) -> &[EnrollmentRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains_username(&self, username: &str) -> bool {
        self.usernames.contains(username)
    }

    /// Append `row` unless its username is already enrolled.
    ///
    /// Returns `false` when the row was skipped as a duplicate.
    pub fn insert(&mut self, row: EnrollmentRow) -> bool {
        if !self.usernames.insert(row.username.clone()) {
            return false;
        }
        self.rows.push(row);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(username: &str, course: &str) -> EnrollmentRow {
        EnrollmentRow {
            username: username.to_string(),
            password: username.chars().take(4).collect(),
            first_name: "Ana".to_string(),
            last_name: "Soto".to_string(),
            email: "ana@mail.cl".to_string(),
            course: course.to_string(),
            role: STUDENT_ROLE,
            institution: "Liceo".to_string(),
            rut: "12.345.678-5".to_string(),
        }
    }

    #[test]
    fn duplicate_usernames_are_skipped() {
        let mut roster = CourseRoster::new("Excel");
        assert!(roster.insert(row("123456785", "Excel")));
        assert!(!roster.insert(row("123456785", "Excel")));
        assert!(roster.insert(row("76543216", "Excel")));
        assert_eq!(roster.len(), 2);
        assert!(roster.contains_username("76543216"));
        assert_eq!(roster.rows()[0].username, "123456785");
    }

    #[test]
    fn row_serializes_with_roster_column_names() {
        let json = serde_json::to_value(row("123456785", "Excel")).expect("serialize");
        assert_eq!(json["firstname"], "Ana");
        assert_eq!(json["course1"], "Excel");
        assert_eq!(json["role1"], 5);
        assert_eq!(json["profile_field_RUT"], "12.345.678-5");
    }
}
