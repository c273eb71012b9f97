//! Length section - checks password minimum length.

use super::SectionResult;

pub(crate) const MIN_LENGTH: usize = 8;

const SUGGESTION: &str = "Use at least 8 characters (12+ is better).";

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in chars, so multi-byte characters count once.
pub fn length_section(password: &str) -> SectionResult {
    if password.chars().count() < MIN_LENGTH {
        return Some(SUGGESTION);
    }
    None
}
