//! Canonical forms for the free-text survey fields.
//!
//! Every function here is total: malformed input yields an empty or
//! best-effort string, never an error.

use roster_model::Credentials;

/// Phones shorter than this after normalization are reported as suspicious.
pub const MIN_PHONE_LENGTH: usize = 9;

/// Chilean country calling code with and without the leading plus.
const COUNTRY_CODE_PLUS: &str = "+56";
const COUNTRY_CODE: &str = "56";
/// Length of a national mobile number prefixed with the bare country code.
const PREFIXED_PHONE_LENGTH: usize = 11;

/// Normalized given names plus the first one, used as the login first name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    pub full: String,
    pub first: String,
}

/// Capitalize every whitespace-separated token and join them with single spaces.
pub fn normalize_name(raw: &str) -> NormalizedName {
    let tokens: Vec<String> = raw.split_whitespace().map(capitalize).collect();
    NormalizedName {
        first: tokens.first().cloned().unwrap_or_default(),
        full: tokens.join(" "),
    }
}

pub fn normalize_surname(raw: &str) -> String {
    let joined = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    title_case(&joined).trim().to_string()
}

pub fn normalize_email(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

pub fn normalize_institution(raw: &str) -> String {
    title_case(raw).trim().to_string()
}

/// Keep digits and `+`, then strip the country code.
///
/// `+56` is removed wherever it appears; otherwise a bare `56` is dropped
/// only from an 11 character number. At most one of the two rules applies.
pub fn normalize_phone(raw: &str) -> String {
    let phone: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect();
    if phone.contains(COUNTRY_CODE_PLUS) {
        phone.replace(COUNTRY_CODE_PLUS, "")
    } else if phone.len() == PREFIXED_PHONE_LENGTH && phone.starts_with(COUNTRY_CODE) {
        phone[COUNTRY_CODE.len()..].to_string()
    } else {
        phone
    }
}

/// Build the login for a normalized RUT.
///
/// The username is the RUT without dots or dash, with an uppercase `K`
/// replaced by `0`. Normalized RUTs carry a lowercase `k`, which is kept.
/// The password is the first four characters of the username.
pub fn derive_credentials(normalized_rut: &str) -> Credentials {
    let username = normalized_rut
        .replace('.', "")
        .replace('-', "")
        .replace('K', "0");
    let password = username.chars().take(4).collect();
    Credentials { username, password }
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(token.len());
    push_word_start(&mut out, first);
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

/// Uppercase every letter that follows a non-letter, lowercase the others.
///
/// Digits and punctuation break words, so `o'higgins` becomes `O'Higgins`
/// and `2do` becomes `2Do`.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut previous_cased = false;
    for ch in raw.chars() {
        let cased = is_cased(ch);
        if !cased {
            out.push(ch);
        } else if previous_cased {
            out.extend(ch.to_lowercase());
        } else {
            push_word_start(&mut out, ch);
        }
        previous_cased = cased;
    }
    out
}

/// Push the leading letter of a word.
///
/// Only the first character of a multi-character uppercase mapping stays
/// uppercase (`ß` gives `Ss`, `ﬁ` gives `Fi`) so the result is a fixed point.
fn push_word_start(out: &mut String, ch: char) {
    let mut upper = ch.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    out.extend(upper.flat_map(char::to_lowercase));
}

/// Letters with case, titlecase digraphs such as `ǅ` included.
fn is_cased(ch: char) -> bool {
    ch.is_lowercase()
        || ch.is_uppercase()
        || ch.to_lowercase().ne(std::iter::once(ch))
        || ch.to_uppercase().ne(std::iter::once(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_capitalized_and_collapsed() {
        let name = normalize_name("juan   pérez");
        assert_eq!(name.full, "Juan Pérez");
        assert_eq!(name.first, "Juan");

        let name = normalize_name("  MARÍA josé ");
        assert_eq!(name.full, "María José");
        assert_eq!(name.first, "María");
    }

    #[test]
    fn empty_name_has_empty_first_token() {
        let name = normalize_name("   ");
        assert_eq!(name.full, "");
        assert_eq!(name.first, "");
    }

    #[test]
    fn multi_letter_uppercase_keeps_one_capital() {
        assert_eq!(normalize_name("ßa").full, "Ssa");
        assert_eq!(normalize_name("ﬁdel castro").full, "Fidel Castro");
        assert_eq!(normalize_institution("liceo ßa"), "Liceo Ssa");
        assert_eq!(normalize_surname("ﬁerro"), "Fierro");
    }

    #[test]
    fn titlecase_digraph_counts_as_a_letter() {
        assert_eq!(title_case("aǅb"), "Aǆb");
        assert_eq!(title_case("ǆa"), "Ǆa");
    }

    #[test]
    fn surnames_drop_extra_spaces() {
        assert_eq!(normalize_surname("  de la  FUENTE  soto"), "De La Fuente Soto");
        assert_eq!(normalize_surname("o'higgins"), "O'Higgins");
    }

    #[test]
    fn institution_keeps_inner_spacing() {
        assert_eq!(normalize_institution(" liceo  a-12 "), "Liceo  A-12");
        assert_eq!(normalize_institution("colegio 2do ciclo"), "Colegio 2Do Ciclo");
    }

    #[test]
    fn email_is_lowercased_and_trimmed() {
        assert_eq!(normalize_email("  Ana.Soto@Mail.CL "), "ana.soto@mail.cl");
    }

    #[test]
    fn plus_country_code_is_removed() {
        assert_eq!(normalize_phone("+56 9 8765 4321"), "987654321");
        assert_eq!(normalize_phone("(+56) 9-8765-4321"), "987654321");
    }

    #[test]
    fn bare_country_code_needs_eleven_characters() {
        assert_eq!(normalize_phone("56987654321"), "987654321");
        assert_eq!(normalize_phone("5698765432"), "5698765432");
        assert_eq!(normalize_phone("569876543210"), "569876543210");
    }

    #[test]
    fn only_one_prefix_rule_applies() {
        // After removing +56 the remainder still starts with 56 and has 11
        // characters, but the bare rule must not fire a second time.
        assert_eq!(normalize_phone("+5656987654321"), "56987654321");
    }

    #[test]
    fn phone_without_prefix_only_loses_punctuation() {
        assert_eq!(normalize_phone("9 8765-4321"), "987654321");
        assert_eq!(normalize_phone("22 345 678"), "22345678");
        assert_eq!(normalize_phone("nan"), "");
    }

    #[test]
    fn credentials_strip_punctuation() {
        let credentials = derive_credentials("12.345.678-5");
        assert_eq!(credentials.username, "123456785");
        assert_eq!(credentials.password, "1234");
    }

    #[test]
    fn only_uppercase_k_becomes_zero() {
        assert_eq!(derive_credentials("1.039.595-k").username, "1039595k");
        assert_eq!(derive_credentials("1.039.595-K").username, "10395950");
    }

    #[test]
    fn short_username_yields_short_password() {
        assert_eq!(derive_credentials("1-9").password, "19");
    }
}
