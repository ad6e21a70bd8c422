//! Length section - minimum length and length bonuses.

use crate::types::HeuristicResult;

pub const MIN_LENGTH: usize = 8;
pub const BONUS_LENGTH: usize = 12;
pub const LONG_BONUS_LENGTH: usize = 16;

/// Records `has_min_length` and both length bonuses.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &str, result: &mut HeuristicResult) {
    let len = password.chars().count();
    result.has_min_length = len >= MIN_LENGTH;
    result.length_bonus_12 = len >= BONUS_LENGTH;
    result.length_bonus_16 = len >= LONG_BONUS_LENGTH;
}
