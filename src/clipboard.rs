// src/clipboard.rs
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("No password to copy!")]
    Empty,

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Native system clipboard.
///
/// The handle is opened on first use and kept for as long as this value
/// lives. On X11 the copied text is only served while the handle exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        if let Some(clipboard) = self.inner.as_mut() {
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Nothing reached the clipboard; the caller shows the text instead.
    Fallback(ClipboardError),
}

/// Try to copy `text`. Never fails: a clipboard problem is reported back as
/// [`CopyOutcome::Fallback`] so the caller can fall back to printing.
pub fn copy_with_fallback(sink: &mut dyn ClipboardSink, text: &str) -> CopyOutcome {
    if text.is_empty() {
        return CopyOutcome::Fallback(ClipboardError::Empty);
    }

    match sink.set_text(text) {
        Ok(()) => {
            log::debug!("Copied {} characters to the clipboard", text.chars().count());
            CopyOutcome::Copied
        }
        Err(e) => {
            log::warn!("Clipboard copy failed: {}", e);
            CopyOutcome::Fallback(e)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Default)]
    pub(crate) struct RecordingClipboard {
        pub copied: Vec<String>,
    }

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    pub(crate) struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn set_text(&mut self, _text: &str) -> Result<()> {
            Err(ClipboardError::Unavailable("no display".to_string()))
        }
    }

    #[test]
    fn copies_text() {
        let mut clipboard = RecordingClipboard::default();
        assert_eq!(copy_with_fallback(&mut clipboard, "s3cr3t!"), CopyOutcome::Copied);
        assert_eq!(clipboard.copied, ["s3cr3t!"]);
    }

    #[test]
    fn failure_becomes_fallback() {
        assert_eq!(
            copy_with_fallback(&mut BrokenClipboard, "s3cr3t!"),
            CopyOutcome::Fallback(ClipboardError::Unavailable("no display".to_string()))
        );
    }

    #[test]
    fn empty_text_is_not_copied() {
        let mut clipboard = RecordingClipboard::default();
        assert_eq!(copy_with_fallback(&mut clipboard, ""), CopyOutcome::Fallback(ClipboardError::Empty));
        assert!(clipboard.copied.is_empty());
    }
}
