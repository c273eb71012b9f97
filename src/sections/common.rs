//! Common-password section - checks the denylist.

use crate::common::is_common_password;
use super::SectionResult;

/// Checks if the password is on the common-password denylist.
///
/// # Returns
/// - `Some(suggestion)` if the password is common
/// - `None` otherwise
pub fn common_password_section(password: &str) -> SectionResult {
    if is_common_password(password) {
        return Some(
            "This password is very common and easy to guess. Choose something more unique.",
        );
    }
    None
}
