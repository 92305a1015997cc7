//! Character classification and column helpers shared by the editing core

/// Check if a character is a punctuation/symbol boundary (not whitespace)
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '/' | ':'
            | ','
            | '.'
            | '-'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | ';'
            | '"'
            | '\''
            | '<'
            | '>'
            | '='
            | '+'
            | '*'
            | '&'
            | '|'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '~'
            | '`'
            | '\\'
            | '?'
    )
}

/// Character type for word navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Whitespace characters, line terminators included
    Whitespace,
    /// Everything that is neither whitespace nor punctuation
    WordChar,
    /// Punctuation and symbols
    Punctuation,
}

/// Get the character type for word navigation
pub fn char_type(ch: char) -> CharType {
    if ch.is_whitespace() {
        CharType::Whitespace
    } else if is_punctuation(ch) {
        CharType::Punctuation
    } else {
        CharType::WordChar
    }
}

/// `\r` or `\n`. A CR+LF pair is made of two of these.
#[inline]
pub fn is_line_terminator(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}

/// Tab width for visual column calculations
pub const TABULATOR_WIDTH: usize = 4;

/// Number of cells `ch` occupies when it starts at `visual_col`.
/// Tabs advance to the next tab stop; everything else is one cell.
#[inline]
pub fn cell_width(ch: char, visual_col: usize) -> usize {
    if ch == '\t' {
        TABULATOR_WIDTH - (visual_col % TABULATOR_WIDTH)
    } else {
        1
    }
}

/// Convert a character column to visual column (screen position).
/// Accounts for tab expansion.
pub fn char_col_to_visual_col<I>(chars: I, char_col: usize) -> usize
where
    I: IntoIterator<Item = char>,
{
    let mut visual_col = 0;

    for (i, ch) in chars.into_iter().enumerate() {
        if i >= char_col {
            break;
        }
        visual_col += cell_width(ch, visual_col);
    }

    visual_col
}
