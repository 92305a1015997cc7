//! Plain-text editing core for a single text field.
//!
//! # Architecture
//!
//! The core components are:
//!
//! - [`TextBuffer`] / [`TextSnapshot`]: rope-backed text with CR+LF-aware
//!   offset coercion; snapshots are cheap to clone and never change
//! - [`word`]: word boundary scanning for word navigation and deletion
//! - [`UndoLog`]: snapshot-based undo/redo, restored through [`UndoHost`]
//! - [`CaretState`] / [`Selection`]: caret plus anchored selection
//! - [`EditEngine`]: turns [`EditIntent`]s into text and caret changes
//! - [`TextLayout`] / [`ClipboardService`]: collaborators supplied by the host
//!
//! Offsets are char indices. Line terminators are `\r`, `\n` and the pair
//! `\r\n`, which navigation and deletion treat as one unit.
//!
//! # Example
//!
//! ```
//! use textfield::editable::{EditConstraints, EditEngine, KeyCommand, Modifiers};
//!
//! let mut field = EditEngine::new("hello world", EditConstraints::single_line());
//! field.set_caret(11);
//! field.on_key_command(KeyCommand::Backspace, Modifiers::CTRL);
//! assert_eq!(field.content(), "hello ");
//!
//! field.on_key_command(KeyCommand::Undo, Modifiers::NONE);
//! assert_eq!(field.content(), "hello world");
//! ```

mod buffer;
mod caret;
mod clipboard;
mod constraints;
mod engine;
mod history;
mod layout;
mod messages;
mod selection;
pub mod word;

// Re-export main types
pub use buffer::{TextBuffer, TextSnapshot};
pub use caret::CaretState;
pub use clipboard::{ClipboardService, MemoryClipboard, SystemClipboard};
pub use constraints::{CharFilter, EditConstraints, LineEnding};
pub use engine::{EditEngine, FieldEvent, FieldListener, FieldState};
pub use history::{UndoHost, UndoLog, UndoState};
pub use layout::{
    line_index_at, line_start, HitResult, LayoutMetrics, LineInfo, MonospaceLayout, Point, Rect,
    TextLayout, TextWrapping,
};
pub use messages::{EditIntent, KeyCommand, Modifiers};
pub use selection::Selection;
pub use word::WordBreaks;
