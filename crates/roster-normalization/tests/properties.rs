//! Property tests for the RUT checksum and the field normalizers.

use proptest::prelude::*;

use roster_normalization::{
    check_character, derive_credentials, is_valid, normalize, normalize_email,
    normalize_institution, normalize_name, normalize_phone,
};

const SPANISH_TEXT: &str = "[a-zA-ZáéíóúüñÁÉÍÓÚÜÑßﬁǅ0-9'. -]{0,40}";

proptest! {
    #[test]
    fn normalized_rut_revalidates(body in 1u32..100_000_000) {
        let body = body.to_string();
        let check = check_character(&body).expect("digit body");
        let normalized = normalize(&format!("{body}{check}"));
        prop_assert!(is_valid(&normalized));

        let (formatted_body, formatted_check) = normalized
            .rsplit_once('-')
            .expect("dash separator");
        let digits: String = formatted_body.chars().filter(char::is_ascii_digit).collect();
        prop_assert_eq!(check_character(&digits), formatted_check.chars().next());
    }

    #[test]
    fn altered_check_character_is_rejected(body in 1u32..100_000_000, offset in 1u32..11) {
        let body = body.to_string();
        let check = check_character(&body).expect("digit body");
        let alphabet = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'k'];
        let position = alphabet.iter().position(|ch| *ch == check).expect("known check");
        let wrong = alphabet[(position + offset as usize) % alphabet.len()];
        let altered = format!("{body}-{wrong}");
        prop_assert!(!is_valid(&altered));
    }

    #[test]
    fn name_normalization_is_a_fixed_point(raw in SPANISH_TEXT) {
        let once = normalize_name(&raw);
        let twice = normalize_name(&once.full);
        prop_assert_eq!(&once.full, &twice.full);
        prop_assert_eq!(once.first, twice.first);
    }

    #[test]
    fn institution_normalization_is_a_fixed_point(raw in SPANISH_TEXT) {
        let once = normalize_institution(&raw);
        prop_assert_eq!(normalize_institution(&once), once);
    }

    #[test]
    fn email_normalization_is_a_fixed_point(raw in "[ A-Za-z0-9._@-]{0,40}") {
        let once = normalize_email(&raw);
        prop_assert_eq!(normalize_email(&once), once);
    }

    #[test]
    fn unprefixed_phones_keep_every_digit(digits in "[1-47-9][0-9]{7,9}") {
        let spaced: String = digits
            .chars()
            .enumerate()
            .flat_map(|(idx, ch)| if idx % 3 == 2 { vec![ch, ' '] } else { vec![ch] })
            .collect();
        prop_assert_eq!(normalize_phone(&spaced), digits);
    }

    #[test]
    fn password_is_username_prefix(body in 1u32..100_000_000) {
        let body = body.to_string();
        let check = check_character(&body).expect("digit body");
        let credentials = derive_credentials(&normalize(&format!("{body}-{check}")));
        prop_assert!(credentials.username.starts_with(&credentials.password));
        prop_assert_eq!(credentials.password.chars().count(), 4.min(credentials.username.len()));
        prop_assert!(!credentials.username.contains(['.', '-']));
    }
}
