//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use textfield::editable::{
    EditConstraints, EditEngine, KeyCommand, LayoutMetrics, MemoryClipboard, Modifiers,
    MonospaceLayout,
};

/// Multi-line field with given text and caret
pub fn test_field(text: &str, caret: usize) -> EditEngine {
    test_field_with(text, caret, EditConstraints::multi_line())
}

/// Field with given text, caret and constraints
pub fn test_field_with(text: &str, caret: usize, constraints: EditConstraints) -> EditEngine {
    let mut field = EditEngine::new(text, constraints)
        .with_layout(MonospaceLayout::new(test_metrics(None)))
        .with_clipboard(MemoryClipboard::new());
    field.set_caret(caret);
    field
}

/// Multi-line field with a selection (anchor..active)
pub fn test_field_with_selection(text: &str, anchor: usize, active: usize) -> EditEngine {
    let mut field = test_field(text, 0);
    field.set_selection(anchor, active);
    field
}

/// Multi-line field that soft-wraps at `wrap_column` cells
pub fn wrapped_field(text: &str, caret: usize, wrap_column: usize) -> EditEngine {
    let mut field = EditEngine::new(text, EditConstraints::multi_line())
        .with_layout(MonospaceLayout::new(test_metrics(Some(wrap_column))));
    field.set_caret(caret);
    field
}

/// 10x20 cells
pub fn test_metrics(wrap_column: Option<usize>) -> LayoutMetrics {
    LayoutMetrics {
        char_width: 10.0,
        line_height: 20.0,
        wrap_column,
    }
}

/// Press a key without modifiers
pub fn press(field: &mut EditEngine, command: KeyCommand) -> bool {
    field.on_key_command(command, Modifiers::NONE)
}

pub fn press_with(field: &mut EditEngine, command: KeyCommand, modifiers: Modifiers) -> bool {
    field.on_key_command(command, modifiers)
}

/// Type text one char at a time, like a keyboard would
pub fn type_text(field: &mut EditEngine, text: &str) {
    for ch in text.chars() {
        field.insert_char(ch);
    }
}

/// (anchor, active) of the current selection
pub fn selection_ends(field: &EditEngine) -> (usize, usize) {
    let selection = field.selection();
    (selection.anchor, selection.active)
}
