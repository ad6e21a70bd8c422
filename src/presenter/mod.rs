//! Presentation adapter
//!
//! Glues the scorer and the generator to a render target and a clipboard.
//! Both collaborators are handed in at construction; the presenter holds no
//! global state and can be driven entirely from tests.

mod clipboard;
mod config;
mod view;

pub use clipboard::{Clipboard, ClipboardError};
#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use config::{PresenterConfig, ACK_DELAY_ENV, DEFAULT_ACK_DELAY, DEFAULT_EMPTY_PROMPT};
pub use view::{Requirement, StrengthClass, StrengthView, Visibility};

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::evaluator::evaluate_password_strength;
use crate::generator::generate_password;
use crate::types::PasswordEvaluation;

/// Result of the generate button.
#[derive(Debug)]
pub struct GeneratedPassword {
    pub password: SecretString,
    pub evaluation: PasswordEvaluation,
    /// Whether the clipboard accepted the password.
    pub copied: bool,
}

pub struct Presenter<V, C> {
    view: V,
    clipboard: C,
    config: PresenterConfig,
    visibility: Visibility,
}

impl<V: StrengthView, C: Clipboard> Presenter<V, C> {
    pub fn new(view: V, clipboard: C, config: PresenterConfig) -> Self {
        Self {
            view,
            clipboard,
            config,
            visibility: Visibility::default(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Renders the empty state and the current visibility.
    pub fn init(&mut self) -> PasswordEvaluation {
        self.view.set_visibility(self.visibility);
        self.on_input(&SecretString::new("".into()))
    }

    /// Scores the current input and redraws the indicator.
    pub fn on_input(&mut self, password: &SecretString) -> PasswordEvaluation {
        let evaluation = evaluate_password_strength(password);
        self.render(&evaluation);
        evaluation
    }

    /// Draws an evaluation: checklist, meter and label.
    pub fn render(&mut self, evaluation: &PasswordEvaluation) {
        let h = &evaluation.heuristics;
        let requirements = [
            (Requirement::Length, h.has_min_length),
            (Requirement::Uppercase, h.has_uppercase),
            (Requirement::Lowercase, h.has_lowercase),
            (Requirement::Number, h.has_digit),
            (Requirement::Special, h.has_special_char),
            (Requirement::Sequence, h.no_common_sequence),
        ];
        for (requirement, met) in requirements {
            self.view.set_requirement(requirement, met);
        }

        let class = StrengthClass::from(evaluation.strength);
        self.view.set_meter(class, evaluation.score.displayed());

        let text = if evaluation.is_empty_input() {
            self.config.empty_prompt.as_str()
        } else {
            evaluation.strength.label()
        };
        self.view.set_text(class, text);
    }

    pub fn toggle_visibility(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.view.set_visibility(self.visibility);
        self.visibility
    }

    /// Generates a password, shows and scores it, then copies it.
    ///
    /// A rejected clipboard write is reported to the view and logged, never
    /// propagated. On success the copy banner is shown; hiding it is left to
    /// the caller (see `acknowledge_copy` with the `async` feature).
    pub fn generate_and_copy(&mut self) -> GeneratedPassword {
        let password = generate_password();
        self.view.set_password(&password);
        let evaluation = self.on_input(&password);

        let copied = match self.clipboard.write_text(password.expose_secret()) {
            Ok(()) => {
                self.view.set_copy_feedback(true);
                true
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Failed to copy generated password: {}", e);
                self.view.copy_failed(&e);
                false
            }
        };

        GeneratedPassword {
            password,
            evaluation,
            copied,
        }
    }

    pub fn hide_copy_feedback(&mut self) {
        self.view.set_copy_feedback(false);
    }

    /// Hides the copy banner after the configured delay, or as soon as
    /// `token` is cancelled.
    #[cfg(feature = "async")]
    pub async fn acknowledge_copy(&mut self, token: CancellationToken) {
        tokio::select! {
            _ = tokio::time::sleep(self.config.ack_delay) => {}
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("copy acknowledgment dismissed early");
            }
        }
        self.hide_copy_feedback();
    }

    /// Full generate flow: generate, score, display, copy, acknowledge.
    #[cfg(feature = "async")]
    pub async fn generate_copy_and_acknowledge(
        &mut self,
        token: CancellationToken,
    ) -> GeneratedPassword {
        let generated = self.generate_and_copy();
        if generated.copied {
            self.acknowledge_copy(token).await;
        }
        generated
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::types::{HeuristicResult, PasswordScore, PasswordStrength};

    fn presenter() -> Presenter<RecordingView, MemoryClipboard> {
        Presenter::new(
            RecordingView::default(),
            MemoryClipboard::default(),
            PresenterConfig::default(),
        )
    }

    #[test]
    fn test_init_shows_prompt() {
        let mut p = presenter();
        let evaluation = p.init();

        assert_eq!(evaluation.strength(), PasswordStrength::VeryWeak);
        let view = p.view();
        assert_eq!(view.text, DEFAULT_EMPTY_PROMPT);
        assert_eq!(view.meter.map(|(c, w)| (c.class_name(), w)), Some(("strength-very-weak", 0)));
        assert_eq!(view.visibility, Some(Visibility::Masked));
        assert_eq!(view.requirements.len(), Requirement::ALL.len());
        assert!(view.requirements.values().all(|met| !met));
    }

    #[test]
    fn test_on_input_renders_label_and_checklist() {
        let mut p = presenter();
        p.on_input(&secret("password"));

        let view = p.view();
        assert_eq!(view.text, "Weak");
        assert_eq!(view.meter.map(|(c, w)| (c.class_name(), w)), Some(("strength-weak", 35)));
        assert!(view.requirements[&Requirement::Length]);
        assert!(view.requirements[&Requirement::Lowercase]);
        assert!(!view.requirements[&Requirement::Uppercase]);
        assert!(!view.requirements[&Requirement::Sequence]);
        assert_eq!(view.checklist[&Requirement::Length], "✅ At least 8 characters");
        assert_eq!(view.checklist[&Requirement::Sequence], "❌ No common sequences");
    }

    #[test]
    fn test_full_score_fills_meter() {
        let mut p = presenter();
        let evaluation = p.on_input(&secret("Zq9!Zq9!Zq9!Zq9!"));

        assert_eq!(evaluation.score.value(), 100);
        assert_eq!(p.view().meter.map(|(_, w)| w), Some(100));
        assert_eq!(p.view().text, "Strong");
    }

    #[test]
    fn test_render_clamps_meter_width() {
        let mut p = presenter();
        let evaluation = PasswordEvaluation {
            score: PasswordScore::new(105),
            heuristics: HeuristicResult::default(),
            strength: PasswordStrength::from_score(PasswordScore::new(105)),
            length: 20,
        };
        p.render(&evaluation);

        let (class, width) = p.view().meter.expect("meter drawn");
        assert_eq!(width, 100);
        assert_eq!(class.strength(), PasswordStrength::Strong);
        assert_eq!(p.view().text, "Strong");
    }

    #[test]
    fn test_custom_empty_prompt() {
        let config = PresenterConfig {
            empty_prompt: "Type something".to_string(),
            ..PresenterConfig::default()
        };
        let mut p = Presenter::new(RecordingView::default(), MemoryClipboard::default(), config);
        p.on_input(&secret("x"));
        assert_eq!(p.view().text, "Very Weak");
        p.on_input(&secret(""));
        assert_eq!(p.view().text, "Type something");
    }

    #[test]
    fn test_toggle_visibility() {
        let mut p = presenter();
        assert_eq!(p.toggle_visibility(), Visibility::Revealed);
        assert_eq!(p.view().visibility, Some(Visibility::Revealed));
        assert_eq!(p.toggle_visibility(), Visibility::Masked);
        assert_eq!(p.visibility(), Visibility::Masked);
    }

    #[test]
    fn test_generate_and_copy() {
        let mut p = presenter();
        let generated = p.generate_and_copy();

        assert!(generated.copied);
        let pwd = generated.password.expose_secret();
        assert_eq!(pwd.len(), 16);
        assert_eq!(p.view().password.as_deref(), Some(pwd));
        assert_eq!(p.clipboard().contents.as_deref(), Some(pwd));
        assert_eq!(generated.evaluation.strength(), PasswordStrength::Strong);
        assert_eq!(p.view().text, "Strong");
        assert!(p.view().feedback_visible());

        p.hide_copy_feedback();
        assert!(!p.view().feedback_visible());
    }

    #[test]
    fn test_generate_with_rejected_clipboard() {
        let mut p = Presenter::new(
            RecordingView::default(),
            RejectingClipboard,
            PresenterConfig::default(),
        );
        let generated = p.generate_and_copy();

        assert!(!generated.copied);
        assert!(p.view().feedback_history.is_empty());
        assert_eq!(
            p.view().failures,
            vec![ClipboardError::Rejected("permission denied".to_string())]
        );
        // the rest of the flow still ran
        assert_eq!(p.view().password.as_deref(), Some(generated.password.expose_secret()));
        assert_eq!(p.view().text, "Strong");
    }
}
