//! Text storage for the editing core.
//!
//! [`TextSnapshot`] is an immutable, cheaply clonable view of the whole field
//! content (a `ropey::Rope` underneath, so clones share structure).
//! [`TextBuffer`] owns the current snapshot and swaps in a new one on every
//! mutation; snapshots handed out earlier (e.g. to the undo log) never change.
//!
//! All offsets are char indices. A CR+LF pair is two chars, and no offset
//! produced by [`TextSnapshot::coerce`] ever falls between them.

use ropey::Rope;
use std::fmt;
use std::ops::Range;

/// Immutable snapshot of the field text.
#[derive(Clone)]
pub struct TextSnapshot {
    rope: Rope,
}

impl TextSnapshot {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a snapshot from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Access the underlying Rope for line/chunk iteration
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Character at `offset`, None past the end
    pub fn char_at(&self, offset: usize) -> Option<char> {
        if offset < self.rope.len_chars() {
            Some(self.rope.char(offset))
        } else {
            None
        }
    }

    /// Get slice of text as String (by character indices, clamped)
    pub fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    /// Full content as String
    pub fn content(&self) -> String {
        self.rope.to_string()
    }

    /// True if `offset` sits between the `\r` and `\n` of a CR+LF pair.
    pub fn splits_crlf(&self, offset: usize) -> bool {
        offset > 0 && self.char_at(offset - 1) == Some('\r') && self.char_at(offset) == Some('\n')
    }

    /// Clamp `offset` to `[0, len]` and move it past the LF if it would split
    /// a CR+LF pair.
    pub fn coerce(&self, offset: usize) -> usize {
        let clamped = offset.min(self.len_chars());
        if self.splits_crlf(clamped) {
            clamped + 1
        } else {
            clamped
        }
    }

    /// Span removed by a forward delete at `offset`.
    ///
    /// Covers both units of a CR+LF pair whether `offset` points at the CR or
    /// (uncoerced) at the LF. Empty at the end of the text.
    pub fn character_span_at(&self, offset: usize) -> Range<usize> {
        let len = self.len_chars();
        if offset >= len {
            return len..len;
        }
        match self.char_at(offset) {
            Some('\n') if offset > 0 && self.char_at(offset - 1) == Some('\r') => {
                offset - 1..offset + 1
            }
            Some('\r') if self.char_at(offset + 1) == Some('\n') => offset..offset + 2,
            _ => offset..offset + 1,
        }
    }

    /// Span removed by a backward delete from `offset`.
    pub fn character_span_before(&self, offset: usize) -> Range<usize> {
        let offset = offset.min(self.len_chars());
        if offset == 0 {
            return 0..0;
        }
        if offset >= 2
            && self.char_at(offset - 1) == Some('\n')
            && self.char_at(offset - 2) == Some('\r')
        {
            offset - 2..offset
        } else {
            offset - 1..offset
        }
    }

    /// New snapshot with `range` replaced by `fragment`. `self` is untouched.
    pub fn replaced(&self, range: Range<usize>, fragment: &str) -> TextSnapshot {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);

        let mut rope = self.rope.clone();
        if start < end {
            rope.remove(start..end);
        }
        if !fragment.is_empty() {
            rope.insert(start, fragment);
        }
        TextSnapshot { rope }
    }
}

impl Default for TextSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TextSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.rope == other.rope
    }
}

impl Eq for TextSnapshot {}

impl PartialEq<str> for TextSnapshot {
    fn eq(&self, other: &str) -> bool {
        self.rope == other
    }
}

impl PartialEq<&str> for TextSnapshot {
    fn eq(&self, other: &&str) -> bool {
        self.rope == *other
    }
}

impl fmt::Debug for TextSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextSnapshot")
            .field(&self.rope.to_string())
            .finish()
    }
}

impl fmt::Display for TextSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl From<&str> for TextSnapshot {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl From<String> for TextSnapshot {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

// =============================================================================
// TextBuffer - owner of the current snapshot
// =============================================================================

/// Owns the field's current text. Every mutation replaces the snapshot
/// wholesale.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    current: TextSnapshot,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            current: TextSnapshot::new(),
        }
    }

    /// Create a TextBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            current: TextSnapshot::from_text(s),
        }
    }

    /// Borrow the current snapshot
    pub fn text(&self) -> &TextSnapshot {
        &self.current
    }

    /// Clone the current snapshot (O(1))
    pub fn snapshot(&self) -> TextSnapshot {
        self.current.clone()
    }

    pub fn len_chars(&self) -> usize {
        self.current.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn coerce(&self, offset: usize) -> usize {
        self.current.coerce(offset)
    }

    pub fn character_span_at(&self, offset: usize) -> Range<usize> {
        self.current.character_span_at(offset)
    }

    pub fn character_span_before(&self, offset: usize) -> Range<usize> {
        self.current.character_span_before(offset)
    }

    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.current.char_at(offset)
    }

    pub fn slice(&self, range: Range<usize>) -> String {
        self.current.slice(range)
    }

    pub fn content(&self) -> String {
        self.current.content()
    }

    /// Replace `[start, end)` with `fragment`, installing a new snapshot.
    pub fn replace(&mut self, range: Range<usize>, fragment: &str) {
        self.current = self.current.replaced(range, fragment);
    }

    /// Remove `range`, returning the removed text
    pub fn remove(&mut self, range: Range<usize>) -> String {
        let removed = self.current.slice(range.clone());
        self.replace(range, "");
        removed
    }

    /// Install `snapshot` as the current text (undo/redo restore)
    pub fn restore(&mut self, snapshot: TextSnapshot) {
        self.current = snapshot;
    }

    /// Set content, replacing everything
    pub fn set_text(&mut self, text: &str) {
        self.current = TextSnapshot::from_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_basic() {
        let text = TextSnapshot::from_text("héllo");
        assert_eq!(text.len_chars(), 5);
        assert_eq!(text.char_at(1), Some('é'));
        assert_eq!(text.char_at(5), None);
        assert_eq!(text.slice(1..3), "él");
        assert_eq!(text.slice(3..99), "lo");
        assert_eq!(text.slice(4..2), "");
    }

    #[test]
    fn test_empty_snapshot_is_valid() {
        let text = TextSnapshot::default();
        assert!(text.is_empty());
        assert_eq!(text.coerce(10), 0);
        assert_eq!(text.character_span_at(0), 0..0);
        assert_eq!(text.character_span_before(0), 0..0);
        assert_eq!(text.content(), "");
    }

    #[test]
    fn test_coerce_clamps() {
        let text = TextSnapshot::from_text("abc");
        assert_eq!(text.coerce(0), 0);
        assert_eq!(text.coerce(3), 3);
        assert_eq!(text.coerce(42), 3);
    }

    #[test]
    fn test_coerce_skips_past_lf() {
        let text = TextSnapshot::from_text("a\r\nb");
        assert_eq!(text.coerce(1), 1);
        assert_eq!(text.coerce(2), 3);
        assert_eq!(text.coerce(3), 3);
    }

    #[test]
    fn test_coerce_is_idempotent() {
        let samples = ["", "a", "\r\n", "a\r\nb", "\r\n\r\n", "x\ry\nz\r\n", "\n\r"];
        for sample in samples {
            let text = TextSnapshot::from_text(sample);
            for offset in 0..sample.len() + 3 {
                let once = text.coerce(offset);
                assert_eq!(text.coerce(once), once, "{sample:?} @ {offset}");
                assert!(!text.splits_crlf(once));
            }
        }
    }

    #[test]
    fn test_lone_cr_and_lf_are_single_units() {
        let text = TextSnapshot::from_text("a\rb\nc");
        assert_eq!(text.coerce(2), 2);
        assert_eq!(text.coerce(4), 4);
        assert_eq!(text.character_span_at(1), 1..2);
        assert_eq!(text.character_span_before(4), 3..4);
    }

    #[test]
    fn test_character_span_at_crlf() {
        let text = TextSnapshot::from_text("a\r\nb");
        assert_eq!(text.character_span_at(0), 0..1);
        assert_eq!(text.character_span_at(1), 1..3);
        assert_eq!(text.character_span_at(2), 1..3);
        assert_eq!(text.character_span_at(3), 3..4);
        assert_eq!(text.character_span_at(4), 4..4);
    }

    #[test]
    fn test_character_span_before_crlf() {
        let text = TextSnapshot::from_text("a\r\nb");
        assert_eq!(text.character_span_before(1), 0..1);
        assert_eq!(text.character_span_before(3), 1..3);
        assert_eq!(text.character_span_before(4), 3..4);
    }

    #[test]
    fn test_replaced_leaves_original_untouched() {
        let original = TextSnapshot::from_text("hello world");
        let edited = original.replaced(0..5, "goodbye");
        assert_eq!(original, "hello world");
        assert_eq!(edited, "goodbye world");
    }

    #[test]
    fn test_replaced_clamps_range() {
        let original = TextSnapshot::from_text("abc");
        assert_eq!(original.replaced(2..99, "Z"), "abZ");
        assert_eq!(original.replaced(10..12, "!"), "abc!");
    }

    #[test]
    fn test_buffer_replace_installs_new_snapshot() {
        let mut buf = TextBuffer::from_text("hello");
        let before = buf.snapshot();
        buf.replace(5..5, " world");
        assert_eq!(buf.text(), &TextSnapshot::from_text("hello world"));
        assert_eq!(before, "hello");
    }

    #[test]
    fn test_buffer_remove_returns_text() {
        let mut buf = TextBuffer::from_text("hello world");
        assert_eq!(buf.remove(5..11), " world");
        assert_eq!(buf.text().content(), "hello");
    }

    #[test]
    fn test_display_matches_content() {
        let text = TextSnapshot::from_text("line1\r\nline2");
        assert_eq!(text.to_string(), text.content());
    }
}
