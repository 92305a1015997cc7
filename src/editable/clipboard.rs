//! Clipboard collaborator.
//!
//! Reads may come back later than they were requested (see
//! `EditEngine::begin_paste`/`complete_paste`); this trait is the synchronous
//! face of that service.

/// Clipboard service consumed by copy, cut and paste.
pub trait ClipboardService {
    /// Current clipboard text, None if empty or unavailable
    fn get_text(&mut self) -> Option<String>;

    /// Replace the clipboard text. Failures are logged, never surfaced.
    fn set_text(&mut self, text: &str);
}

/// In-process clipboard. Default for engines that are not wired to the OS.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ClipboardService for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

/// System clipboard via `arboard`. A fresh handle is opened per access so a
/// missing display server only disables the clipboard instead of failing
/// engine construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.get_text() {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::debug!("Clipboard read returned no text: {}", e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to open system clipboard: {}", e);
                None
            }
        }
    }

    fn set_text(&mut self, text: &str) {
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            if let Err(e) = clipboard.set_text(text.to_string()) {
                tracing::warn!("Failed to write system clipboard: {}", e);
            }
        } else {
            tracing::warn!("Failed to open system clipboard");
        }
    }
}
