//! Common-password denylist.
//!
//! The list is fixed and compiled in; lookups are case-insensitive.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Widely known weak passwords, stored lower-case.
pub const COMMON_PASSWORDS: [&str; 10] = [
    "password",
    "123456",
    "12345678",
    "123456789",
    "qwerty",
    "111111",
    "abc123",
    "iloveyou",
    "admin",
    "welcome",
];

static COMMON_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_PASSWORDS.into_iter().collect());

/// Returns the denylist as a set.
pub fn common_passwords() -> &'static HashSet<&'static str> {
    &COMMON_SET
}

/// Checks if a password is on the denylist.
///
/// The input is lower-cased before the lookup, so only an exact match of the
/// lower-cased form counts. Substrings and padded variants do not match.
pub fn is_common_password(password: &str) -> bool {
    COMMON_SET.contains(password.to_lowercase().as_str())
}
