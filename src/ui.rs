//! Presentation support for front ends.
//!
//! A [`Controller`] is built once at startup and owns everything a strength
//! form needs: the input source, the reveal toggle and the last rendered
//! [`StrengthView`]. The evaluator is called as a plain function.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::evaluate_secret;
use crate::types::{EvaluationResult, Score};

/// Text shown before the first check.
pub const INITIAL_HINT: &str =
    "Enter a password above and click 'Check Strength' to see the result.";

/// Text shown when a password passes every check.
pub const ALL_CHECKS_PASSED: &str = "Your password satisfies all basic checks.";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("No password input available")]
    Closed,
    #[error("Failed to read password input: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the controller reads the current password from, e.g. a text field.
pub trait PasswordSource {
    fn read(&mut self) -> Result<SecretString, InputError>;
}

/// A fixed password, useful for one-shot front ends and tests.
impl PasswordSource for SecretString {
    fn read(&mut self) -> Result<SecretString, InputError> {
        Ok(SecretString::from(self.expose_secret()))
    }
}

/// Render model for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthView {
    /// e.g. `"Medium (score: 4/6)"`; empty before the first check.
    pub headline: String,
    /// Named color for the headline, `None` before the first check.
    pub color: Option<&'static str>,
    /// Progress indicator value and its fixed maximum.
    pub progress: (u8, u8),
    /// Bulleted suggestions or the all-passed message.
    pub details: String,
}

impl StrengthView {
    pub fn initial() -> Self {
        Self {
            headline: String::new(),
            color: None,
            progress: (0, Score::MAX),
            details: INITIAL_HINT.to_string(),
        }
    }

    pub fn from_result(result: &EvaluationResult) -> Self {
        let details = if result.suggestions.is_empty() {
            ALL_CHECKS_PASSED.to_string()
        } else {
            let bullets: Vec<String> = result
                .suggestions
                .iter()
                .map(|s| format!("• {s}"))
                .collect();
            format!("Suggestions:\n{}", bullets.join("\n"))
        };

        Self {
            headline: format!(
                "{} (score: {}/{})",
                result.strength,
                result.score.value(),
                Score::MAX
            ),
            color: Some(result.strength.color_name()),
            progress: (result.score.value(), Score::MAX),
            details,
        }
    }
}

/// Application state for a strength-check form.
pub struct Controller<S> {
    source: S,
    reveal: bool,
    view: StrengthView,
    last: Option<EvaluationResult>,
}

impl<S: PasswordSource> Controller<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            reveal: false,
            view: StrengthView::initial(),
            last: None,
        }
    }

    /// Starts with the reveal toggle already set.
    pub fn with_reveal(mut self, reveal: bool) -> Self {
        self.reveal = reveal;
        self
    }

    /// Reads the current input, evaluates it and updates the view.
    ///
    /// On a read error the previous view is kept.
    pub fn check(&mut self) -> Result<&StrengthView, InputError> {
        let password = self.source.read()?;
        let result = evaluate_secret(&password);

        #[cfg(feature = "tracing")]
        tracing::debug!(strength = %result.strength, "view updated");

        self.view = StrengthView::from_result(&result);
        self.last = Some(result);
        Ok(&self.view)
    }

    /// Flips between masked and revealed input. Evaluation is unaffected.
    pub fn toggle_reveal(&mut self) -> bool {
        self.reveal = !self.reveal;
        self.reveal
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal
    }

    /// Text to show in the input field: the password itself when revealed,
    /// otherwise one `*` per character.
    pub fn display(&self, password: &SecretString) -> String {
        let pwd = password.expose_secret();
        if self.reveal {
            pwd.to_string()
        } else {
            "*".repeat(pwd.chars().count())
        }
    }

    pub fn view(&self) -> &StrengthView {
        &self.view
    }

    /// The result behind the current view, if a check has run.
    pub fn last_result(&self) -> Option<&EvaluationResult> {
        self.last.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Strength;

    /// Simulates an editable text field.
    struct FieldStub {
        text: Option<String>,
    }

    impl PasswordSource for FieldStub {
        fn read(&mut self) -> Result<SecretString, InputError> {
            self.text
                .as_deref()
                .map(SecretString::from)
                .ok_or(InputError::Closed)
        }
    }

    fn field(text: &str) -> FieldStub {
        FieldStub {
            text: Some(text.to_string()),
        }
    }

    #[test]
    fn test_controller_initial_view() {
        let controller = Controller::new(field(""));
        assert_eq!(controller.view().details, INITIAL_HINT);
        assert_eq!(controller.view().progress, (0, 6));
        assert!(controller.view().color.is_none());
        assert!(controller.last_result().is_none());
    }

    #[test]
    fn test_controller_check_strong_password() {
        let mut controller = Controller::new(field("Password1!"));
        let view = controller.check().expect("check should succeed").clone();

        assert_eq!(view.headline, "Very Strong (score: 6/6)");
        assert_eq!(view.color, Some("darkgreen"));
        assert_eq!(view.progress, (6, 6));
        assert_eq!(view.details, ALL_CHECKS_PASSED);
        assert_eq!(
            controller.last_result().map(|r| r.strength),
            Some(Strength::VeryStrong)
        );
    }

    #[test]
    fn test_controller_check_renders_bullets() {
        let mut controller = Controller::new(field("abc"));
        let view = controller.check().expect("check should succeed");

        assert_eq!(view.headline, "Very Weak (score: 1/6)");
        assert_eq!(view.color, Some("red"));
        assert_eq!(
            view.details,
            "Suggestions:\n\
             • Use at least 8 characters (12+ is better).\n\
             • Add at least one uppercase letter (A-Z).\n\
             • Add at least one digit (0-9).\n\
             • Add at least one special character (e.g. !, @, #, ?, %, &)."
        );
    }

    #[test]
    fn test_controller_follows_field_edits() {
        let mut controller = Controller::new(field("abcdefgh"));
        assert_eq!(controller.check().unwrap().color, Some("orangered"));

        controller.source_mut().text = Some("abcdefH1".to_string());
        assert_eq!(controller.check().unwrap().headline, "Strong (score: 5/6)");
    }

    #[test]
    fn test_controller_read_error_keeps_view() {
        let mut controller = Controller::new(field("abcdefgH"));
        controller.check().expect("check should succeed");

        controller.source_mut().text = None;
        let result = controller.check();
        assert!(matches!(result, Err(InputError::Closed)));
        assert_eq!(controller.view().headline, "Medium (score: 4/6)");
    }

    #[test]
    fn test_controller_toggle_reveal() {
        let pwd = SecretString::from("héllo");
        let mut controller = Controller::new(field("héllo"));

        assert_eq!(controller.display(&pwd), "*****");
        assert!(controller.toggle_reveal());
        assert_eq!(controller.display(&pwd), "héllo");
        assert!(!controller.toggle_reveal());
        assert!(!controller.is_revealed());
    }

    #[test]
    fn test_reveal_does_not_affect_evaluation() {
        let mut masked = Controller::new(field("Secret9?"));
        let mut revealed = Controller::new(field("Secret9?")).with_reveal(true);
        assert_eq!(masked.check().unwrap(), revealed.check().unwrap());
    }

    #[test]
    fn test_secret_string_source() {
        let mut controller = Controller::new(SecretString::from("password"));
        let view = controller.check().expect("check should succeed");
        assert_eq!(view.headline, "Very Weak (score: 1/6)");
        assert!(view.details.ends_with("Choose something more unique."));
    }
}
