//! Caret and selection state, always coerced against the current text.

use super::buffer::TextSnapshot;
use super::selection::Selection;

/// Caret offset plus selection.
///
/// Every setter takes the current snapshot and coerces the new offset, so no
/// end ever points past the text or between the units of a CR+LF pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaretState {
    caret: usize,
    selection: Selection,
}

impl CaretState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caret at `offset` with an empty selection
    pub fn at(offset: usize, text: &TextSnapshot) -> Self {
        let caret = text.coerce(offset);
        Self {
            caret,
            selection: Selection::collapsed(caret),
        }
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Move the caret. The selection is left alone.
    pub fn set_caret(&mut self, offset: usize, text: &TextSnapshot) {
        self.caret = text.coerce(offset);
    }

    pub fn set_anchor(&mut self, offset: usize, text: &TextSnapshot) {
        self.selection.anchor = text.coerce(offset);
    }

    pub fn set_active(&mut self, offset: usize, text: &TextSnapshot) {
        self.selection.active = text.coerce(offset);
    }

    /// Set both selection ends; the caret follows the active end.
    pub fn set_selection(&mut self, anchor: usize, active: usize, text: &TextSnapshot) {
        self.selection = Selection::new(text.coerce(anchor), text.coerce(active));
        self.caret = self.selection.active;
    }

    /// Substring covered by the selection, empty if the range is degenerate
    /// or no longer inside `text`.
    pub fn selected_text(&self, text: &TextSnapshot) -> String {
        let start = self.selection.start();
        let end = self.selection.end();
        if start >= end || end > text.len_chars() {
            return String::new();
        }
        text.slice(start..end)
    }

    pub fn select_all(&mut self, text: &TextSnapshot) {
        let len = text.len_chars();
        self.selection = Selection::new(0, len);
        self.caret = len;
    }

    /// Collapse both selection ends to the caret
    pub fn clear_selection_to_caret(&mut self) {
        self.selection.collapse_to(self.caret);
    }

    /// Re-coerce caret and selection after the text changed underneath them.
    pub fn recoerce(&mut self, text: &TextSnapshot) {
        self.caret = text.coerce(self.caret);
        self.selection.anchor = text.coerce(self.selection.anchor);
        self.selection.active = text.coerce(self.selection.active);
    }
}
