//! Selection type for the editing core.

use std::ops::Range;

/// A text selection with anchor (fixed end) and active (moving end), as char
/// offsets. The two ends are not normalized: the anchor may sit after the
/// active end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// The end that follows the caret while extending
    pub active: usize,
}

impl Selection {
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            active: offset,
        }
    }

    /// Check if selection is empty (anchor == active)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Smaller of the two ends
    pub fn start(&self) -> usize {
        self.anchor.min(self.active)
    }

    /// Larger of the two ends
    pub fn end(&self) -> usize {
        self.anchor.max(self.active)
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// Check if selection is reversed (active before anchor)
    pub fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }

    /// Move the active end, keeping the anchor
    pub fn extend_to(&mut self, offset: usize) {
        self.active = offset;
    }

    /// Collapse both ends to `offset`
    pub fn collapse_to(&mut self, offset: usize) {
        self.anchor = offset;
        self.active = offset;
    }
}
