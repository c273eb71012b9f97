//! Password strength checking library
//!
//! Scores a password against fixed heuristic rules (length, character
//! variety, a common-password denylist) and returns a score out of 6, a
//! strength label and suggestions for improvement. Intended for form
//! feedback, not as a security control.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation over a channel with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-check` terminal front end
//!
//! # Example
//!
//! ```rust
//! use pwd_checker::{evaluate, Strength};
//!
//! let evaluation = evaluate("MyP@ssw0rd!");
//!
//! assert_eq!(evaluation.score.value(), 6);
//! assert_eq!(evaluation.strength, Strength::VeryStrong);
//! assert!(evaluation.suggestions.is_empty());
//! ```

// Internal modules
mod common;
mod evaluator;
mod sections;
mod types;

pub mod ui;

// Public API
pub use common::{COMMON_PASSWORDS, common_passwords, is_common_password};
pub use evaluator::{evaluate, evaluate_secret};
pub use types::{EvaluationResult, Score, Strength};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, evaluate_tx};
