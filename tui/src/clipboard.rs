//! System clipboard backed by `arboard`.

use std::io;
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use finder_engine::Clipboard;

/// Writes to the system clipboard from a dedicated worker thread.
///
/// The worker owns a single `arboard::Clipboard` for its whole life. On X11
/// and Wayland the copied text is served by that handle, so it must outlive
/// individual writes. Failures are logged and dropped; the UI never waits.
pub struct SystemClipboard {
    tx: mpsc::UnboundedSender<String>,
}

impl SystemClipboard {
    pub fn spawn() -> io::Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::Builder::new()
            .name("finder-clipboard".to_string())
            .spawn(move || clipboard_loop(rx))?;
        Ok(Self { tx })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: String) {
        if self.tx.send(text).is_err() {
            warn!("Clipboard worker has stopped; copy dropped");
        }
    }
}

fn clipboard_loop(mut rx: mpsc::UnboundedReceiver<String>) {
    let mut handle: Option<arboard::Clipboard> = None;

    while let Some(text) = rx.blocking_recv() {
        if handle.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => handle = Some(clipboard),
                Err(err) => {
                    warn!("Clipboard unavailable: {err}");
                    continue;
                }
            }
        }

        if let Some(clipboard) = handle.as_mut() {
            match clipboard.set_text(text) {
                Ok(()) => debug!("Clipboard updated"),
                Err(err) => {
                    warn!("Clipboard write failed: {err}");
                    // Reconnect on the next write.
                    handle = None;
                }
            }
        }
    }

    debug!("Clipboard worker exiting");
}
