//! Tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging caret,
//! selection and undo transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=trace` - per-key caret/selection diffs
//! - `RUST_LOG=textfield::editable=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/textfield/logs/textfield.log` with daily rotation.
//! File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::editable::EditEngine;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`) and goes to stderr so
/// it never mixes with JSON written to stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of caret/selection/undo state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub caret: usize,
    pub anchor: usize,
    pub active: usize,
    pub text_len: usize,
    pub undo_entries: usize,
    pub undo_current: usize,
}

impl FieldSnapshot {
    pub fn capture(engine: &EditEngine) -> Self {
        let selection = engine.selection();
        let log = engine.undo_log();
        Self {
            caret: engine.caret(),
            anchor: selection.anchor,
            active: selection.active,
            text_len: engine.text().len_chars(),
            undo_entries: log.len(),
            undo_current: log.undo_count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &FieldSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.text_len != other.text_len {
            changes.push(format!("len: {} → {}", self.text_len, other.text_len));
        }
        if self.caret != other.caret {
            changes.push(format!("caret: {} → {}", self.caret, other.caret));
        }
        if (self.anchor, self.active) != (other.anchor, other.active) {
            let status = if other.anchor == other.active {
                "cleared".to_string()
            } else {
                format!("{}..{}", other.anchor, other.active)
            };
            changes.push(format!("selection {}", status));
        }
        if (self.undo_entries, self.undo_current) != (other.undo_entries, other.undo_current) {
            changes.push(format!(
                "undo: {}/{} → {}/{}",
                self.undo_current, self.undo_entries, other.undo_current, other.undo_entries
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
