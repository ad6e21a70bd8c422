//! Sequence section - rejects passwords containing predictable substrings.

use crate::sequences::has_common_sequence;
use crate::types::HeuristicResult;

/// Records `no_common_sequence`.
///
/// An empty password earns nothing, so it never meets this heuristic.
pub fn sequence_section(password: &str, result: &mut HeuristicResult) {
    result.no_common_sequence = !password.is_empty() && !has_common_sequence(password);
}
