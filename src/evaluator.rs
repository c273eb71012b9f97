//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionResult, common_password_section, digit_section, length_section, lowercase_section,
    special_section, uppercase_section,
};
use crate::types::{EvaluationResult, Score};

const EMPTY_PASSWORD: &str = "Password cannot be empty.";

/// Score assigned to any password on the common-password denylist.
const COMMON_PASSWORD_SCORE: u8 = 1;

/// Delay before [`evaluate_tx`] runs, so bursts of input only evaluate once.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

type Section = (&'static str, u8, fn(&str) -> SectionResult);

/// Scored sections in evaluation order: name, points awarded on pass, check.
const SECTIONS: [Section; 5] = [
    ("length", 2, length_section),
    ("lowercase", 1, lowercase_section),
    ("uppercase", 1, uppercase_section),
    ("digit", 1, digit_section),
    ("special", 1, special_section),
];

/// Evaluates password strength.
///
/// Every input yields a result. The empty string short-circuits with a score
/// of zero; otherwise each section adds its points or its suggestion, and a
/// denylisted password has its score forced to 1 while keeping the
/// suggestions gathered so far.
pub fn evaluate(password: &str) -> EvaluationResult {
    if password.is_empty() {
        return EvaluationResult::new(Score::default(), vec![EMPTY_PASSWORD.to_string()]);
    }

    let mut score: u8 = 0;
    let mut suggestions = Vec::new();

    // Orchestrator: execute sections in sequence
    for (_section_name, points, section_fn) in SECTIONS {
        match section_fn(password) {
            Some(suggestion) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(section = _section_name, "section failed");
                suggestions.push(suggestion.to_string());
            }
            None => score += points,
        }
    }

    // Runs last and always wins
    if let Some(suggestion) = common_password_section(password) {
        score = COMMON_PASSWORD_SCORE;
        suggestions.push(suggestion.to_string());
    }

    let result = EvaluationResult::new(Score::new(score), suggestions);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = password.chars().count(),
        score = result.score.value(),
        strength = %result.strength,
        "password evaluated"
    );

    result
}

/// Same as [`evaluate`], for passwords held as a [`SecretString`].
pub fn evaluate_secret(password: &SecretString) -> EvaluationResult {
    evaluate(password.expose_secret())
}

/// Async version that sends the evaluation result via channel.
///
/// Waits [`EVALUATION_DEBOUNCE`] first; if `token` is cancelled in the
/// meantime nothing is evaluated or sent.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let evaluation = evaluate_secret(&password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
