//! Fixed column names of the enrollment survey export.

use crate::error::{ModelError, Result};

pub const TIMESTAMP: &str = "Marca temporal";
pub const NAMES: &str = "Nombres";
pub const SURNAMES: &str = "Apellidos";
pub const RUT: &str = "RUT";
pub const EMAIL: &str = "Dirección de correo electrónico";
pub const INSTITUTION: &str = "Establecimiento";
pub const PHONE: &str = "Teléfono";
pub const COURSES: &str = "¿Cuál o cuáles cursos le interesan?";

/// Columns the survey export must carry.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    TIMESTAMP,
    NAMES,
    SURNAMES,
    RUT,
    EMAIL,
    INSTITUTION,
    PHONE,
    COURSES,
];

/// Header row of every course roster file.
pub const ROSTER_HEADERS: [&str; 9] = [
    "username",
    "password",
    "firstname",
    "lastname",
    "email",
    "course1",
    "role1",
    "institution",
    "profile_field_RUT",
];

/// Positions of the known columns inside a source header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub timestamp: usize,
    pub names: usize,
    pub surnames: usize,
    pub rut: usize,
    pub email: usize,
    pub institution: usize,
    pub phone: usize,
    pub courses: usize,
}

impl ColumnLayout {
    /// Locate every required column by exact name; the first match wins.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.as_ref() == name)
                .ok_or_else(|| ModelError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            timestamp: find(TIMESTAMP)?,
            names: find(NAMES)?,
            surnames: find(SURNAMES)?,
            rut: find(RUT)?,
            email: find(EMAIL)?,
            institution: find(INSTITUTION)?,
            phone: find(PHONE)?,
            courses: find(COURSES)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_columns_in_any_order() {
        let mut headers: Vec<&str> = REQUIRED_COLUMNS.iter().rev().copied().collect();
        headers.insert(2, "Comentarios");
        let layout = ColumnLayout::resolve(&headers).expect("layout");
        assert_eq!(headers[layout.rut], RUT);
        assert_eq!(headers[layout.courses], COURSES);
        assert_eq!(headers[layout.timestamp], TIMESTAMP);
    }

    #[test]
    fn reports_the_missing_column() {
        let headers = [TIMESTAMP, NAMES, SURNAMES, EMAIL, INSTITUTION, PHONE, COURSES];
        let error = ColumnLayout::resolve(&headers).expect_err("rut missing");
        assert!(matches!(error, ModelError::MissingColumn(ref name) if name == RUT));
    }
}
