//! Utility modules

pub mod text;

pub use text::{
    cell_width, char_col_to_visual_col, char_type, is_line_terminator, is_punctuation, CharType,
    TABULATOR_WIDTH,
};
