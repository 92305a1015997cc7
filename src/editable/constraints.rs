//! Edit constraints for the editing core.
//!
//! Constraints decide which mutations a field accepts and how raw input is
//! cleaned up before it reaches the buffer.

use serde::{Deserialize, Serialize};

use crate::util::is_line_terminator;

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Terminator inserted by the Enter key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Constraints that limit what operations are allowed in a field.
#[derive(Debug, Clone)]
pub struct EditConstraints {
    /// Mutations become no-ops; navigation and selection still work
    pub read_only: bool,

    /// Enter inserts a line break and pasted/typed line breaks are kept
    pub accepts_return: bool,

    /// Tab inserts `\t` instead of being left to the host
    pub accepts_tab: bool,

    /// Enable undo/redo tracking
    pub enable_undo: bool,

    /// Maximum number of undo entries (None = unlimited)
    pub undo_limit: Option<usize>,

    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,

    /// Hide the content from copy and cut (password fields)
    pub conceal: bool,

    /// What Enter inserts when `accepts_return` is set
    pub line_ending: LineEnding,

    /// Character filter (None = all characters allowed)
    /// Returns true if character is allowed
    pub char_filter: Option<CharFilter>,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self {
            read_only: false,
            accepts_return: false,
            accepts_tab: false,
            enable_undo: true,
            undo_limit: None,
            max_length: None,
            conceal: false,
            line_ending: LineEnding::Lf,
            char_filter: None,
        }
    }
}

impl EditConstraints {
    /// Single-line input (line breaks stripped from input)
    pub fn single_line() -> Self {
        Self::default()
    }

    /// Multi-line text area
    pub fn multi_line() -> Self {
        Self {
            accepts_return: true,
            accepts_tab: true,
            ..Self::default()
        }
    }

    /// Selectable but not editable
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            accepts_return: true,
            ..Self::default()
        }
    }

    /// Numeric input constraints (digits only)
    pub fn numeric() -> Self {
        Self {
            max_length: Some(10),
            char_filter: Some(|c| c.is_ascii_digit()),
            ..Self::default()
        }
    }

    /// Password input: single line, no copy/cut
    pub fn password() -> Self {
        Self {
            conceal: true,
            ..Self::default()
        }
    }

    /// Check if a character passes the filter (if any)
    pub fn is_char_allowed(&self, ch: char) -> bool {
        match self.char_filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }

    /// Strip characters the field never stores: DEL always, line breaks when
    /// the field does not accept returns.
    pub fn sanitize(&self, input: &str) -> String {
        input
            .chars()
            .filter(|&c| c != '\u{7f}')
            .filter(|&c| self.accepts_return || !is_line_terminator(c))
            .collect()
    }

    /// Check if replacing `replaced_len` chars with `insert_len` chars would
    /// exceed max length
    pub fn would_exceed_max_length(
        &self,
        current_len: usize,
        replaced_len: usize,
        insert_len: usize,
    ) -> bool {
        if let Some(max) = self.max_length {
            current_len - replaced_len.min(current_len) + insert_len > max
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_line_constraints() {
        let c = EditConstraints::multi_line();
        assert!(c.accepts_return);
        assert!(c.accepts_tab);
        assert!(!c.read_only);
        assert!(c.enable_undo);
        assert!(c.is_char_allowed('\n'));
    }

    #[test]
    fn test_single_line_sanitize_strips_breaks() {
        let c = EditConstraints::single_line();
        assert_eq!(c.sanitize("a\r\nb\nc"), "abc");
        assert_eq!(c.sanitize("x\u{7f}y"), "xy");
    }

    #[test]
    fn test_multi_line_sanitize_keeps_breaks() {
        let c = EditConstraints::multi_line();
        assert_eq!(c.sanitize("a\r\nb\u{7f}"), "a\r\nb");
    }

    #[test]
    fn test_numeric_constraints() {
        let c = EditConstraints::numeric();
        assert!(c.is_char_allowed('0'));
        assert!(c.is_char_allowed('9'));
        assert!(!c.is_char_allowed('a'));
        assert!(!c.is_char_allowed('-'));
    }

    #[test]
    fn test_max_length_accounts_for_replaced_text() {
        let c = EditConstraints::numeric();
        assert!(!c.would_exceed_max_length(5, 0, 3));
        assert!(c.would_exceed_max_length(8, 0, 5));
        assert!(!c.would_exceed_max_length(10, 4, 4));
        assert!(!EditConstraints::default().would_exceed_max_length(usize::MAX / 2, 0, 1));
    }

    #[test]
    fn test_line_ending_str() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }
}
