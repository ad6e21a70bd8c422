//! Password strength evaluator - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{character_variety_section, length_section, sequence_section, Section};
use crate::types::{HeuristicResult, PasswordEvaluation, PasswordScore, PasswordStrength};

/// Scores a password.
///
/// Every section runs regardless of the others. The label is taken from the
/// raw score, before any clamping for display. Defined for every input,
/// including the empty string.
pub fn score(password: &str) -> PasswordEvaluation {
    let sections: [Section; 3] = [length_section, character_variety_section, sequence_section];

    let mut heuristics = HeuristicResult::default();
    for section_fn in sections {
        section_fn(password, &mut heuristics);
    }

    let score = PasswordScore::new(heuristics.points());
    let strength = PasswordStrength::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(score = score.value(), ?strength, "password evaluated");

    PasswordEvaluation {
        score,
        heuristics,
        strength,
        length: password.chars().count(),
    }
}

/// Evaluates password strength and returns a detailed evaluation.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` containing the raw score, the per-heuristic
/// breakdown and the strength label.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    score(password.expose_secret())
}

/// Async version for live typing: evaluates and sends the result via channel.
///
/// Nothing is sent if `token` is cancelled, which lets a newer keystroke
/// supersede this one.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation superseded before start");
        return;
    }

    let evaluation = evaluate_password_strength(password);

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded before send");
        }
        res = tx.send(evaluation) => {
            if let Err(_e) = res {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password evaluation result: {}", _e);
            }
        }
    }
}
