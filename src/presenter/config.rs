//! Presenter configuration.

use std::time::Duration;

/// Environment variable overriding the copy acknowledgment delay, in ms.
pub const ACK_DELAY_ENV: &str = "PWD_METER_ACK_MS";

pub const DEFAULT_ACK_DELAY: Duration = Duration::from_secs(3);
pub const DEFAULT_EMPTY_PROMPT: &str = "Enter a password to check its strength";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenterConfig {
    /// How long the "copied" banner stays up.
    pub ack_delay: Duration,
    /// Shown instead of the strength label while the input is empty.
    pub empty_prompt: String,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            ack_delay: DEFAULT_ACK_DELAY,
            empty_prompt: DEFAULT_EMPTY_PROMPT.to_string(),
        }
    }
}

impl PresenterConfig {
    /// Builds the config from defaults plus environment overrides.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_METER_ACK_MS`
    /// 2. Default of 3 seconds
    ///
    /// A value that does not parse as milliseconds is ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(ACK_DELAY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.ack_delay = Duration::from_millis(ms),
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Ignoring invalid {}={:?}: {}", ACK_DELAY_ENV, raw, _e);
                }
            }
        }
        config
    }
}
