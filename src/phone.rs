//! Client phone numbers in the national 10-digit form.
//!
//! Clients type phones however they like (`+7 (909) 511-73-46`,
//! `8 909 511 73 46`, bare digits); matching and dedup work on the
//! 10-digit national part, and the store keeps the `+7XXXXXXXXXX` form.

/// Strip everything but digits and a leading `7`/`8` country prefix.
/// Returns `None` unless exactly 10 digits remain.
pub fn normalize_phone(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    let cleaned = if digits.starts_with('7') || digits.starts_with('8') {
        &digits[1..]
    } else {
        digits.as_str()
    };

    if cleaned.len() != 10 {
        return None;
    }

    Some(cleaned.to_string())
}

/// The `+7XXXXXXXXXX` form persisted in the store.
pub fn to_database_phone(normalized: &str) -> String {
    format!("+7{}", normalized)
}

/// Display form `+7 (XXX) XXX-XX-XX`; inputs that do not normalize are
/// returned untouched.
#[allow(unused)]
pub fn format_phone(phone: &str) -> String {
    match normalize_phone(phone) {
        Some(digits) => format!(
            "+7 ({}) {}-{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..8],
            &digits[8..]
        ),
        None => phone.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_collapse_to_the_same_national_number() {
        assert_eq!(normalize_phone("+7 (909) 511-73-46").as_deref(), Some("9095117346"));
        assert_eq!(normalize_phone("89095117346").as_deref(), Some("9095117346"));
        assert_eq!(normalize_phone("9095117346").as_deref(), Some("9095117346"));
        assert_eq!(normalize_phone("8 909 511 73 46").as_deref(), Some("9095117346"));
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        assert_eq!(normalize_phone("12345"), None);
        assert_eq!(normalize_phone("790951173461"), None);
        assert_eq!(normalize_phone(""), None);
        assert_eq!(normalize_phone("abc"), None);
    }

    #[test]
    fn database_form_gets_the_country_prefix() {
        assert_eq!(to_database_phone("9095117346"), "+79095117346");
    }

    #[test]
    fn display_form_is_grouped() {
        assert_eq!(format_phone("89095117346"), "+7 (909) 511-73-46");
        assert_eq!(format_phone("not a phone"), "not a phone");
    }
}
