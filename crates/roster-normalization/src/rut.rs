//! RUT (Chilean national ID) checksum validation and canonical formatting.
//!
//! A RUT is a decimal body followed by a modulo-11 check character, written
//! as `12.345.678-5`. Any punctuation in the input is ignored: only ASCII
//! digits and the letter `k` are significant.

/// Cyclic weights applied from the least significant body digit.
const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Split a raw RUT into its body and lowercase check character.
fn extract(raw: &str) -> Option<(String, char)> {
    let mut significant: Vec<char> = raw
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == 'k')
        .collect();
    if significant.len() < 2 {
        return None;
    }
    let check = significant.pop()?;
    Some((significant.into_iter().collect(), check))
}

/// Compute the check character for a body of decimal digits.
///
/// Returns `None` when the body is empty or holds anything but ASCII digits.
pub fn check_character(body: &str) -> Option<char> {
    if body.is_empty() {
        return None;
    }
    let mut sum = 0u32;
    for (position, ch) in body.chars().rev().enumerate() {
        let digit = ch.to_digit(10)?;
        sum += digit * WEIGHTS[position % WEIGHTS.len()];
    }
    match 11 - sum % 11 {
        11 => Some('0'),
        10 => Some('k'),
        value => char::from_digit(value, 10),
    }
}

/// Whether `raw` carries a well-formed body and a matching check character.
pub fn is_valid(raw: &str) -> bool {
    let Some((body, check)) = extract(raw) else {
        return false;
    };
    check_character(&body) == Some(check)
}

/// Format a RUT as `XX.XXX.XXX-c` with a lowercase check character.
///
/// Leading zeros of the body are dropped. The input is not validated;
/// call [`is_valid`] first.
pub fn normalize(raw: &str) -> String {
    let Some((body, check)) = extract(raw) else {
        return raw.trim().to_string();
    };
    format!("{}-{check}", group_thousands(&body))
}

fn group_thousands(body: &str) -> String {
    let digits = body.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_is_valid() {
        assert!(is_valid("12.345.678-5"));
        assert_eq!(normalize("12.345.678-5"), "12.345.678-5");
    }

    #[test]
    fn punctuation_and_spacing_are_ignored() {
        assert!(is_valid("12345678-5"));
        assert!(is_valid(" 12 345 678 5 "));
        assert_eq!(normalize("123456785"), "12.345.678-5");
        assert_eq!(normalize("7654321-6"), "7.654.321-6");
    }

    #[test]
    fn check_character_k_is_case_insensitive() {
        assert_eq!(check_character("1039595"), Some('k'));
        assert!(is_valid("1.039.595-k"));
        assert!(is_valid("1.039.595-K"));
        assert_eq!(normalize("1.039.595-K"), "1.039.595-k");
    }

    #[test]
    fn wrong_check_digit_is_rejected() {
        assert!(!is_valid("11.111.111-0"));
        assert!(is_valid("11.111.111-1"));
    }

    #[test]
    fn too_short_or_malformed_input_is_rejected() {
        assert!(!is_valid(""));
        assert!(!is_valid("5"));
        assert!(!is_valid("-"));
        assert!(!is_valid("nan"));
        assert!(!is_valid("12k45678-5"));
    }

    #[test]
    fn leading_zeros_are_dropped_when_formatting() {
        assert_eq!(normalize("01.039.595-k"), "1.039.595-k");
        assert_eq!(group_thousands("000"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
    }

    #[test]
    fn every_residue_maps_to_its_check_character() {
        // (weighted sum mod 11, body, expected check character)
        let table = [
            (0, "1055433", '0'),
            (1, "1039595", 'k'),
            (2, "1000000", '9'),
            (3, "1071271", '8'),
            (4, "1047514", '7'),
            (5, "1031676", '6'),
            (6, "1007919", '5'),
            (7, "1063352", '4'),
            (8, "1087109", '3'),
            (9, "1023757", '2'),
            (10, "1079190", '1'),
        ];
        for (residue, body, expected) in table {
            assert_eq!(check_character(body), Some(expected), "residue {residue}");
            assert!(is_valid(&format!("{body}-{expected}")), "body {body}");
        }
    }
}
