//! Render-target abstraction and the visual vocabulary it speaks.

use secrecy::SecretString;

use super::clipboard::ClipboardError;
use crate::types::PasswordStrength;

/// One line of the requirement checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Length,
    Uppercase,
    Lowercase,
    Number,
    Special,
    Sequence,
}

impl Requirement {
    pub const ALL: [Requirement; 6] = [
        Requirement::Length,
        Requirement::Uppercase,
        Requirement::Lowercase,
        Requirement::Number,
        Requirement::Special,
        Requirement::Sequence,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Requirement::Length => "At least 8 characters",
            Requirement::Uppercase => "Contains uppercase letter",
            Requirement::Lowercase => "Contains lowercase letter",
            Requirement::Number => "Contains number",
            Requirement::Special => "Contains special character",
            Requirement::Sequence => "No common sequences",
        }
    }

    pub fn icon(met: bool) -> &'static str {
        if met { "✅" } else { "❌" }
    }
}

/// Visual class of the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrengthClass(PasswordStrength);

impl StrengthClass {
    pub fn strength(&self) -> PasswordStrength {
        self.0
    }

    pub fn class_name(&self) -> &'static str {
        match self.0 {
            PasswordStrength::VeryWeak => "strength-very-weak",
            PasswordStrength::Weak => "strength-weak",
            PasswordStrength::Fair => "strength-fair",
            PasswordStrength::Good => "strength-good",
            PasswordStrength::Strong => "strength-strong",
        }
    }
}

impl From<PasswordStrength> for StrengthClass {
    fn from(strength: PasswordStrength) -> Self {
        Self(strength)
    }
}

/// Whether the password field shows its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Masked,
    Revealed,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Revealed,
            Visibility::Revealed => Visibility::Masked,
        }
    }

    /// Icon for the toggle button.
    pub fn icon(&self) -> &'static str {
        match self {
            Visibility::Masked => "👁️",
            Visibility::Revealed => "🙈",
        }
    }
}

/// Everything the presenter draws on.
///
/// Implementations own the actual widgets; the presenter only decides what
/// they should show.
pub trait StrengthView {
    fn set_requirement(&mut self, requirement: Requirement, met: bool);

    /// `width_percent` is already clamped to `0..=100`.
    fn set_meter(&mut self, class: StrengthClass, width_percent: u32);

    fn set_text(&mut self, class: StrengthClass, text: &str);

    fn set_password(&mut self, password: &SecretString);

    fn set_visibility(&mut self, visibility: Visibility);

    fn set_copy_feedback(&mut self, visible: bool);

    /// Called when the clipboard rejected a write. Ignored by default.
    fn copy_failed(&mut self, _error: &ClipboardError) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        let names: Vec<_> = [
            PasswordStrength::VeryWeak,
            PasswordStrength::Weak,
            PasswordStrength::Fair,
            PasswordStrength::Good,
            PasswordStrength::Strong,
        ]
        .into_iter()
        .map(|s| StrengthClass::from(s).class_name())
        .collect();
        assert_eq!(
            names,
            [
                "strength-very-weak",
                "strength-weak",
                "strength-fair",
                "strength-good",
                "strength-strong"
            ]
        );
    }

    #[test]
    fn test_visibility_toggle() {
        let v = Visibility::default();
        assert_eq!(v, Visibility::Masked);
        assert_eq!(v.toggled(), Visibility::Revealed);
        assert_eq!(v.toggled().toggled(), Visibility::Masked);
        assert_eq!(v.toggled().icon(), "🙈");
    }

    #[test]
    fn test_requirement_icons() {
        assert_eq!(Requirement::icon(true), "✅");
        assert_eq!(Requirement::icon(false), "❌");
        assert_eq!(Requirement::ALL.len(), 6);
    }

    #[test]
    fn test_requirement_descriptions_are_distinct() {
        let descriptions: std::collections::HashSet<_> =
            Requirement::ALL.iter().map(|r| r.description()).collect();
        assert_eq!(descriptions.len(), Requirement::ALL.len());
        assert_eq!(Requirement::Number.description(), "Contains number");
    }

    #[test]
    fn test_strength_class_round_trips_strength() {
        let class = StrengthClass::from(PasswordStrength::Fair);
        assert_eq!(class.strength(), PasswordStrength::Fair);
        assert_eq!(class.class_name(), "strength-fair");
    }
}
