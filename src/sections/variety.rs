//! Character variety section - uppercase, lowercase, digits, special chars.

use crate::types::HeuristicResult;

/// Punctuation counted as "special" by the scorer.
pub const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Records the four character-class heuristics.
///
/// Only ASCII letters and digits count; accented letters do not.
pub fn character_variety_section(password: &str, result: &mut HeuristicResult) {
    result.has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    result.has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    result.has_digit = password.chars().any(|c| c.is_ascii_digit());
    result.has_special_char = password.chars().any(|c| SPECIAL_CHARS.contains(c));
}
