//! Password evaluation sections
//!
//! Each section fills in the heuristics for one aspect of password strength.
//! Sections never read each other's output.

mod length;
mod sequence;
mod variety;

pub use length::length_section;
pub use sequence::sequence_section;
pub use variety::character_variety_section;

use crate::types::HeuristicResult;

/// Signature shared by every section: inspect the password, record the
/// heuristics this section owns.
pub type Section = fn(&str, &mut HeuristicResult);
