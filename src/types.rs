//! Evaluation result types: score, strength label and the result value.

use std::fmt;

/// Rule-compliance score, always within `0..=Score::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// Highest score a password can reach.
    pub const MAX: u8 = 6;

    /// Creates a score, saturating at [`Score::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Categorical strength bucket, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Maps a score to its bucket: 0-2 very weak, then one bucket per point.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0..=2 => Strength::VeryWeak,
            3 => Strength::Weak,
            4 => Strength::Medium,
            5 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    /// Named color used when rendering this strength.
    pub fn color_name(self) -> &'static str {
        match self {
            Strength::VeryWeak => "red",
            Strength::Weak => "orangered",
            Strength::Medium => "orange",
            Strength::Strong => "green",
            Strength::VeryStrong => "darkgreen",
        }
    }

    /// Truecolor equivalent of [`Strength::color_name`].
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Strength::VeryWeak => (255, 0, 0),
            Strength::Weak => (255, 69, 0),
            Strength::Medium => (255, 165, 0),
            Strength::Strong => (0, 128, 0),
            Strength::VeryStrong => (0, 100, 0),
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single evaluation.
///
/// `suggestions` holds one entry per failed rule, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub score: Score,
    pub strength: Strength,
    pub suggestions: Vec<String>,
}

impl EvaluationResult {
    /// Builds a result whose strength is derived from `score`.
    pub fn new(score: Score, suggestions: Vec<String>) -> Self {
        Self {
            score,
            strength: Strength::from_score(score),
            suggestions,
        }
    }

    /// True when every check passed.
    pub fn is_clean(&self) -> bool {
        self.suggestions.is_empty()
    }
}
