//! Password evaluation sections
//!
//! Each section checks one rule and reports the suggestion to show when the
//! rule fails.

mod common;
mod length;
mod variety;

pub use common::common_password_section;
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section check functions.
/// - `Some(suggestion)` - Section failed, with the remediation to show
/// - `None` - Section passed
pub type SectionResult = Option<&'static str>;
