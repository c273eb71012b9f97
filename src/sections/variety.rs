//! Character variety sections - lowercase, uppercase, digits, special chars.
//!
//! Letter and digit classes follow Unicode, so non-ASCII letters count.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use super::SectionResult;

/// Characters accepted by [`special_section`].
pub(crate) const SPECIAL_CHARS: &str = "!@#$%^&*()-_=+[]{};:'\",.<>?/\\|`~";

pub fn lowercase_section(password: &str) -> SectionResult {
    if password.chars().any(char::is_lowercase) {
        return None;
    }
    Some("Add at least one lowercase letter (a-z).")
}

pub fn uppercase_section(password: &str) -> SectionResult {
    if password.chars().any(char::is_uppercase) {
        return None;
    }
    Some("Add at least one uppercase letter (A-Z).")
}

/// Passes on any Unicode decimal digit (category `Nd`), not only `0-9`.
/// Fractions, Roman numerals and circled numbers do not count.
pub fn digit_section(password: &str) -> SectionResult {
    if password
        .chars()
        .any(|c| c.general_category() == GeneralCategory::DecimalNumber)
    {
        return None;
    }
    Some("Add at least one digit (0-9).")
}

/// Passes only on characters from [`SPECIAL_CHARS`]; other symbols such as
/// spaces or `£` do not count.
pub fn special_section(password: &str) -> SectionResult {
    if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return None;
    }
    Some("Add at least one special character (e.g. !, @, #, ?, %, &).")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_missing_lowercase() {
        let result = lowercase_section("UPPERCASE123!");
        assert!(matches!(result, Some(s) if s.contains("lowercase")));
        assert_eq!(lowercase_section("mixedCASE"), None);
    }

    #[test]
    fn test_variety_missing_uppercase() {
        let result = uppercase_section("lowercase123!");
        assert!(matches!(result, Some(s) if s.contains("uppercase")));
        assert_eq!(uppercase_section("lowerUpper"), None);
    }

    #[test]
    fn test_variety_missing_digit() {
        let result = digit_section("NoNumbers!");
        assert!(matches!(result, Some(s) if s.contains("digit")));
        assert_eq!(digit_section("abc7"), None);
    }

    #[test]
    fn test_variety_missing_special() {
        let result = special_section("NoSpecial123");
        assert!(matches!(result, Some(s) if s.contains("special")));
    }

    #[test]
    fn test_special_section_every_member() {
        for c in SPECIAL_CHARS.chars() {
            assert_eq!(special_section(&c.to_string()), None, "{c:?} should count");
        }
    }

    #[test]
    fn test_special_section_rejects_other_symbols() {
        assert!(special_section("with space").is_some());
        assert!(special_section("£€§").is_some());
    }

    #[test]
    fn test_variety_unicode_letters() {
        assert_eq!(uppercase_section("Élan"), None);
        assert_eq!(lowercase_section("STRAßE"), None);
        assert!(lowercase_section("ΑΒΓ").is_some());
        assert_eq!(uppercase_section("ΑΒΓ"), None);
    }

    #[test]
    fn test_digit_section_unicode_digits() {
        // Arabic-Indic digit three
        assert_eq!(digit_section("abc\u{0663}"), None);
        // Fullwidth digit seven
        assert_eq!(digit_section("abc\u{FF17}"), None);
    }

    #[test]
    fn test_digit_section_rejects_non_decimal_numbers() {
        for pwd in ["abc½", "abcⅫ", "abc①", "abc²"] {
            assert!(
                matches!(digit_section(pwd), Some(s) if s.contains("digit")),
                "{pwd:?} should not count as a digit"
            );
        }
    }
}
