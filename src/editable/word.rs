//! Word boundary scanning over a text snapshot.
//!
//! The default classification is two-class: whitespace (line terminators
//! included) is a separator, everything else is a word character. Word
//! navigation and word deletion stop at the edges of those runs.
//!
//! [`WordBreaks::Punctuation`] additionally splits punctuation runs from
//! alphanumeric runs, so `foo.bar` contains three words instead of one. This
//! changes observed boundaries and is opt-in.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::util::{char_type, CharType};

use super::buffer::TextSnapshot;

/// How characters are grouped into words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordBreaks {
    /// Whitespace vs. non-whitespace
    #[default]
    Whitespace,
    /// Whitespace, punctuation and word characters are separate classes
    Punctuation,
}

impl WordBreaks {
    fn class_of(self, ch: char) -> CharType {
        match self {
            WordBreaks::Whitespace => {
                if ch.is_whitespace() {
                    CharType::Whitespace
                } else {
                    CharType::WordChar
                }
            }
            WordBreaks::Punctuation => char_type(ch),
        }
    }

    fn class_at(self, text: &TextSnapshot, offset: usize) -> Option<CharType> {
        text.char_at(offset).map(|ch| self.class_of(ch))
    }
}

/// Start of the word before `offset`: skip the separator run touching
/// `offset`, then the word run before it. Offset 0 is a fixed point.
pub fn previous_word_start(text: &TextSnapshot, offset: usize, breaks: WordBreaks) -> usize {
    let mut pos = offset.min(text.len_chars());

    while pos > 0 && breaks.class_at(text, pos - 1) == Some(CharType::Whitespace) {
        pos -= 1;
    }

    if pos > 0 {
        let run = breaks.class_at(text, pos - 1);
        while pos > 0 && breaks.class_at(text, pos - 1) == run {
            pos -= 1;
        }
    }

    pos
}

/// Start of the next word after `offset`: skip the current word run, then
/// the separator run after it. The text length is a fixed point.
pub fn next_word_start(text: &TextSnapshot, offset: usize, breaks: WordBreaks) -> usize {
    let len = text.len_chars();
    let mut pos = offset.min(len);

    if let Some(run) = breaks.class_at(text, pos) {
        if run != CharType::Whitespace {
            while pos < len && breaks.class_at(text, pos) == Some(run) {
                pos += 1;
            }
        }
    }

    while pos < len && breaks.class_at(text, pos) == Some(CharType::Whitespace) {
        pos += 1;
    }

    pos
}

/// True at either end of the text, or where a word run begins.
pub fn is_start_of_word(text: &TextSnapshot, offset: usize, breaks: WordBreaks) -> bool {
    let len = text.len_chars();
    if offset == 0 || offset >= len {
        return true;
    }

    match (
        breaks.class_at(text, offset - 1),
        breaks.class_at(text, offset),
    ) {
        (Some(before), Some(after)) => after != CharType::Whitespace && before != after,
        _ => true,
    }
}

/// Range selected by a double-click at `offset`: from the start of the word
/// under the pointer to the start of the next one.
pub fn word_range_at(text: &TextSnapshot, offset: usize, breaks: WordBreaks) -> Range<usize> {
    let offset = offset.min(text.len_chars());
    let start = if is_start_of_word(text, offset, breaks) {
        offset
    } else {
        previous_word_start(text, offset, breaks)
    };
    start..next_word_start(text, offset, breaks)
}
