//! Password strength meter and generator
//!
//! Scores passwords against a fixed set of heuristics and generates random
//! passwords that satisfy all of them. A small presentation adapter drives
//! any render target and clipboard through the [`presenter`] traits.
//!
//! # Features
//!
//! - `async` (default): copy acknowledgment timer and live evaluation channel
//! - `tracing`: Enables logging via tracing crate
//! - `clipboard`: System clipboard via copypasta
//!
//! # Environment Variables
//!
//! - `PWD_METER_ACK_MS`: how long the copy acknowledgment stays visible
//!   (default: 3000)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{generate_password, score, PasswordStrength};
//! use secrecy::ExposeSecret;
//!
//! let evaluation = score("Aa1!Aa1!Aa1!Aa1!");
//! assert_eq!(evaluation.score.value(), 100);
//! assert_eq!(evaluation.strength(), PasswordStrength::Strong);
//!
//! let password = generate_password();
//! assert_eq!(password.expose_secret().len(), 16);
//! ```

// Internal modules
mod evaluator;
mod generator;
mod sections;
mod sequences;
mod types;

pub mod presenter;

// Public API
pub use evaluator::{evaluate_password_strength, score};
pub use generator::{generate_password, generate_password_with, GENERATED_LENGTH};
pub use sequences::{find_common_sequence, has_common_sequence, COMMON_SEQUENCES};
pub use types::{
    HeuristicResult, PasswordEvaluation, PasswordScore, PasswordStrength, MAX_DISPLAYED_SCORE,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
