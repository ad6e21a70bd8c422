//! Evaluation result types.

use std::fmt;

/// Highest score shown to the user.
pub const MAX_DISPLAYED_SCORE: u32 = 100;

/// Raw, unclamped sum of the points awarded by each heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u32);

impl PasswordScore {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw score. Every heuristic met gives 100.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Score clamped to `0..=100`, used for the meter width.
    pub fn displayed(&self) -> u32 {
        self.0.min(MAX_DISPLAYED_SCORE)
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strength label derived from the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Thresholds are applied to the raw, unclamped score.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0..30 => Self::VeryWeak,
            30..50 => Self::Weak,
            50..70 => Self::Fair,
            70..90 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of every heuristic, each computed on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeuristicResult {
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special_char: bool,
    pub no_common_sequence: bool,
    /// Length of at least 12.
    pub length_bonus_12: bool,
    /// Length of at least 16.
    pub length_bonus_16: bool,
}

impl HeuristicResult {
    pub const MIN_LENGTH_POINTS: u32 = 20;
    pub const CLASS_POINTS: u32 = 15;
    pub const NO_SEQUENCE_POINTS: u32 = 10;
    pub const LENGTH_BONUS_POINTS: u32 = 5;

    /// Sum of the points for every met heuristic.
    pub fn points(&self) -> u32 {
        [
            (self.has_min_length, Self::MIN_LENGTH_POINTS),
            (self.has_uppercase, Self::CLASS_POINTS),
            (self.has_lowercase, Self::CLASS_POINTS),
            (self.has_digit, Self::CLASS_POINTS),
            (self.has_special_char, Self::CLASS_POINTS),
            (self.no_common_sequence, Self::NO_SEQUENCE_POINTS),
            (self.length_bonus_12, Self::LENGTH_BONUS_POINTS),
            (self.length_bonus_16, Self::LENGTH_BONUS_POINTS),
        ]
        .iter()
        .filter(|(met, _)| *met)
        .map(|(_, points)| points)
        .sum()
    }
}

/// Full result of scoring one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub heuristics: HeuristicResult,
    pub strength: PasswordStrength,
    /// Length of the evaluated password, in characters.
    pub length: usize,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    pub fn is_empty_input(&self) -> bool {
        self.length == 0
    }
}
