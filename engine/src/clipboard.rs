//! Clipboard seam.
//!
//! The engine only ever writes to the clipboard and never waits on the
//! outcome. Implementations must not block the caller and must swallow their
//! own failures.

pub trait Clipboard: Send {
    fn write_text(&mut self, text: String);
}

/// Discards every write. Used when no system clipboard is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullClipboard;

impl Clipboard for NullClipboard {
    fn write_text(&mut self, text: String) {
        tracing::debug!(bytes = text.len(), "Clipboard unavailable; dropping copy");
    }
}
