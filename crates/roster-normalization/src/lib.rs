//! Pure normalization rules for enrollment survey fields.
//!
//! - [`rut`]: Chilean national ID (RUT) checksum validation and formatting
//! - [`fields`]: names, surnames, emails, institutions, phones and credentials

pub mod fields;
pub mod rut;

pub use fields::{
    derive_credentials, normalize_email, normalize_institution, normalize_name,
    normalize_phone, normalize_surname, title_case, NormalizedName, MIN_PHONE_LENGTH,
};
pub use rut::{check_character, is_valid, normalize};
