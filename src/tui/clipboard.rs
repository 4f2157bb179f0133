// File: ./src/tui/clipboard.rs
// System clipboard access for copying hex and rgb values
use crate::tui::action::AppEvent;

/// Opened on first use and then kept, so the copied text stays available
/// on platforms where the owning process must keep the selection alive.
#[derive(Default)]
pub struct Clipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `text` on the clipboard and reports the outcome for the status line.
    pub fn copy(&mut self, text: &str) -> AppEvent {
        match self.set_text(text) {
            Ok(()) => {
                log::info!("Copied {} to clipboard", text);
                AppEvent::Status(format!("Copied {}", text))
            }
            Err(e) => {
                log::error!("Failed to copy to clipboard: {}", e);
                AppEvent::Error(format!("Clipboard unavailable: {}", e))
            }
        }
    }

    fn set_text(&mut self, text: &str) -> Result<(), arboard::Error> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        self.inner.insert(clipboard).set_text(text)
    }
}
