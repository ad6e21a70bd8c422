//! Clipboard sink for generated passwords.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// Somewhere a generated password can be copied to.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard, via copypasta.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    ctx: copypasta::ClipboardContext,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    /// Opens the platform clipboard.
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError::Unavailable` when no clipboard can be reached,
    /// e.g. a headless session.
    pub fn new() -> Result<Self, ClipboardError> {
        let ctx = copypasta::ClipboardContext::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { ctx })
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        use copypasta::ClipboardProvider;

        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Rejected(e.to_string()))
    }
}
