//! Common sequence denylist
//!
//! Predictable substrings that cost a password its sequence points.
//! The set is fixed at compile time and matched case-insensitively.

/// Lowercase substrings checked by containment.
pub const COMMON_SEQUENCES: [&str; 28] = [
    "123", "234", "345", "456", "567", "678", "789",
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi",
    "qwerty", "asdf", "zxcv", "password", "admin",
    "111", "222", "333", "444", "555", "666", "777", "888", "999",
];

/// Returns the first common sequence contained in `password`, if any.
///
/// Matching is case-insensitive: `"PassWORD"` hits `"password"`.
pub fn find_common_sequence(password: &str) -> Option<&'static str> {
    let lower = password.to_lowercase();
    COMMON_SEQUENCES
        .iter()
        .copied()
        .find(|seq| lower.contains(seq))
}

/// Returns `true` if `password` contains any common sequence.
pub fn has_common_sequence(password: &str) -> bool {
    find_common_sequence(password).is_some()
}
