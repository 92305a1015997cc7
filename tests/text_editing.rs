//! Text editing tests - insert, delete, word delete, clipboard

mod common;

use common::{
    press, press_with, test_field, test_field_with, test_field_with_selection, type_text,
};
use textfield::editable::{
    ClipboardService, EditConstraints, EditIntent, KeyCommand, LineEnding, Modifiers,
};

// ========================================================================
// Insert tests
// ========================================================================

#[test]
fn test_insert_into_empty_field() {
    let mut field = test_field("", 0);
    assert!(field.on_text_input("ab"));

    assert_eq!(field.content(), "ab");
    assert_eq!(field.caret(), 2);
    assert!(!field.has_selection());
}

#[test]
fn test_insert_at_middle() {
    let mut field = test_field("hello", 2);
    field.insert_char('X');

    assert_eq!(field.content(), "heXllo");
    assert_eq!(field.caret(), 3);
}

#[test]
fn test_insert_replaces_reversed_selection() {
    let mut field = test_field_with_selection("hello world", 11, 6);
    field.on_text_input("there");

    assert_eq!(field.content(), "hello there");
    assert_eq!(field.caret(), 11);
}

#[test]
fn test_insert_multibyte_text_counts_chars() {
    let mut field = test_field("ab", 1);
    field.on_text_input("héllo😀");

    assert_eq!(field.content(), "ahéllo😀b");
    assert_eq!(field.caret(), 7);
}

#[test]
fn test_insert_empty_text_is_noop() {
    let mut field = test_field("abc", 1);
    assert!(!field.on_text_input(""));
    assert_eq!(field.undo_log().len(), 1);
}

#[test]
fn test_single_line_strips_line_breaks() {
    let mut field = test_field_with("", 0, EditConstraints::single_line());
    field.on_text_input("one\r\ntwo\nthree");

    assert_eq!(field.content(), "onetwothree");
    assert!(!press(&mut field, KeyCommand::Enter));
    assert_eq!(field.content(), "onetwothree");
}

#[test]
fn test_del_char_is_always_stripped() {
    let mut field = test_field("", 0);
    field.on_text_input("a\u{7f}b");
    assert_eq!(field.content(), "ab");

    assert!(!field.on_text_input("\u{7f}"));
}

#[test]
fn test_enter_inserts_configured_line_ending() {
    let mut field = test_field("ab", 1);
    assert!(press(&mut field, KeyCommand::Enter));
    assert_eq!(field.content(), "a\nb");

    let constraints = EditConstraints {
        line_ending: LineEnding::CrLf,
        ..EditConstraints::multi_line()
    };
    let mut field = test_field_with("ab", 1, constraints);
    press(&mut field, KeyCommand::Enter);
    assert_eq!(field.content(), "a\r\nb");
    assert_eq!(field.caret(), 3);
}

#[test]
fn test_tab_needs_accepts_tab() {
    let mut field = test_field("", 0);
    assert!(press(&mut field, KeyCommand::Tab));
    assert_eq!(field.content(), "\t");

    let mut field = test_field_with("", 0, EditConstraints::single_line());
    assert!(!press(&mut field, KeyCommand::Tab));
    assert_eq!(field.content(), "");
}

#[test]
fn test_numeric_filter_rejects_whole_input() {
    let mut field = test_field_with("12", 2, EditConstraints::numeric());
    assert!(!field.on_text_input("3a"));
    assert_eq!(field.content(), "12");

    assert!(field.on_text_input("34"));
    assert_eq!(field.content(), "1234");
}

#[test]
fn test_max_length_counts_replaced_selection() {
    let constraints = EditConstraints {
        max_length: Some(5),
        ..EditConstraints::single_line()
    };
    let mut field = test_field_with("hello", 5, constraints);
    assert!(!field.on_text_input("!"));

    field.set_selection(0, 5);
    assert!(field.on_text_input("howdy"));
    assert_eq!(field.content(), "howdy");
}

// ========================================================================
// Delete tests
// ========================================================================

#[test]
fn test_backspace_at_start_is_noop() {
    let mut field = test_field("hello", 0);
    assert!(!press(&mut field, KeyCommand::Backspace));
    assert_eq!(field.content(), "hello");
}

#[test]
fn test_delete_at_end_is_noop() {
    let mut field = test_field("hello", 5);
    assert!(!press(&mut field, KeyCommand::Delete));
    assert_eq!(field.content(), "hello");
}

#[test]
fn test_backspace_removes_crlf_pair() {
    let mut field = test_field("a\r\nb", 3);
    press(&mut field, KeyCommand::Backspace);

    assert_eq!(field.content(), "ab");
    assert_eq!(field.caret(), 1);
}

#[test]
fn test_delete_at_cr_removes_pair() {
    let mut field = test_field("a\r\nb", 1);
    press(&mut field, KeyCommand::Delete);

    assert_eq!(field.content(), "ab");
    assert_eq!(field.caret(), 1);
}

#[test]
fn test_lone_cr_and_lf_are_single_units() {
    let mut field = test_field("a\rb\nc", 2);
    press(&mut field, KeyCommand::Backspace);
    assert_eq!(field.content(), "ab\nc");

    press(&mut field, KeyCommand::Right);
    press(&mut field, KeyCommand::Delete);
    assert_eq!(field.content(), "abc");
}

#[test]
fn test_backspace_deletes_selection() {
    let mut field = test_field_with_selection("hello world", 0, 6);
    press(&mut field, KeyCommand::Backspace);

    assert_eq!(field.content(), "world");
    assert_eq!(field.caret(), 0);
}

#[test]
fn test_delete_deletes_reversed_selection() {
    let mut field = test_field_with_selection("hello world", 11, 5);
    press(&mut field, KeyCommand::Delete);

    assert_eq!(field.content(), "hello");
    assert_eq!(field.caret(), 5);
}

#[test]
fn test_one_backspace_per_typed_char_restores_text() {
    let mut field = test_field("a\r\nb", 1);
    let typed = "x\ny z";
    type_text(&mut field, typed);
    assert_eq!(field.content(), "ax\ny z\r\nb");

    for _ in typed.chars() {
        press(&mut field, KeyCommand::Backspace);
    }
    assert_eq!(field.content(), "a\r\nb");
    assert_eq!(field.caret(), 1);
}

// ========================================================================
// Word delete tests
// ========================================================================

#[test]
fn test_ctrl_backspace_deletes_previous_word() {
    let mut field = test_field("hello world", 11);
    press_with(&mut field, KeyCommand::Backspace, Modifiers::CTRL);

    assert_eq!(field.content(), "hello ");
    assert_eq!(field.caret(), 6);
}

#[test]
fn test_ctrl_backspace_from_mid_word() {
    let mut field = test_field("hello world", 8);
    press_with(&mut field, KeyCommand::Backspace, Modifiers::CTRL);

    assert_eq!(field.content(), "hello rld");
    assert_eq!(field.caret(), 6);
}

#[test]
fn test_ctrl_backspace_with_selection_deletes_selection() {
    let mut field = test_field_with_selection("hello world", 1, 3);
    press_with(&mut field, KeyCommand::Backspace, Modifiers::CTRL);

    assert_eq!(field.content(), "hlo world");
}

#[test]
fn test_ctrl_delete_keeps_one_trailing_space() {
    let mut field = test_field("foo bar ", 0);
    press_with(&mut field, KeyCommand::Delete, Modifiers::CTRL);

    assert_eq!(field.content(), " bar ");
    assert_eq!(field.caret(), 0);
}

#[test]
fn test_ctrl_delete_single_space_is_removed() {
    let mut field = test_field("a b", 1);
    press_with(&mut field, KeyCommand::Delete, Modifiers::CTRL);

    assert_eq!(field.content(), "ab");
}

#[test]
fn test_ctrl_delete_last_word() {
    let mut field = test_field("foo bar", 4);
    press_with(&mut field, KeyCommand::Delete, Modifiers::CTRL);

    assert_eq!(field.content(), "foo ");
}

#[test]
fn test_ctrl_delete_at_end_is_noop() {
    let mut field = test_field("foo", 3);
    assert!(!press_with(&mut field, KeyCommand::Delete, Modifiers::CTRL));
    assert_eq!(field.content(), "foo");
}

// ========================================================================
// Read-only tests
// ========================================================================

#[test]
fn test_read_only_blocks_mutations_but_not_navigation() {
    let mut field = test_field_with("hello", 0, EditConstraints::read_only());

    assert!(!field.on_text_input("x"));
    assert!(!press(&mut field, KeyCommand::Delete));
    assert!(!press(&mut field, KeyCommand::Enter));
    assert!(!press_with(&mut field, KeyCommand::Backspace, Modifiers::CTRL));
    assert_eq!(field.content(), "hello");

    assert!(press_with(&mut field, KeyCommand::End, Modifiers::SHIFT));
    assert_eq!(field.selected_text(), "hello");
}

#[test]
fn test_read_only_toggle() {
    let mut field = test_field("abc", 3);
    field.set_read_only(true);
    assert!(!field.on_text_input("d"));

    field.set_read_only(false);
    assert!(field.on_text_input("d"));
    assert_eq!(field.content(), "abcd");
}

// ========================================================================
// Clipboard tests
// ========================================================================

#[test]
fn test_copy_and_paste() {
    let mut field = test_field_with_selection("hello world", 0, 5);
    press(&mut field, KeyCommand::Copy);
    assert_eq!(field.content(), "hello world");

    press(&mut field, KeyCommand::End);
    press(&mut field, KeyCommand::Paste);
    assert_eq!(field.content(), "hello worldhello");
    assert_eq!(field.caret(), 16);
}

#[test]
fn test_copy_without_selection_leaves_clipboard() {
    let mut field = test_field("hello", 2);
    field.clipboard_mut().set_text("kept");

    assert!(!field.copy());
    assert_eq!(field.clipboard_mut().get_text().as_deref(), Some("kept"));
}

#[test]
fn test_cut_is_one_undo_step() {
    let mut field = test_field_with_selection("hello world", 5, 11);
    assert!(press(&mut field, KeyCommand::Cut));
    assert_eq!(field.content(), "hello");
    assert_eq!(field.clipboard_mut().get_text().as_deref(), Some(" world"));

    press(&mut field, KeyCommand::Undo);
    assert_eq!(field.content(), "hello world");
}

#[test]
fn test_cut_in_read_only_field_does_nothing() {
    let mut field = test_field_with("hello", 0, EditConstraints::read_only());
    field.select_all();

    assert!(!field.cut());
    assert_eq!(field.content(), "hello");
}

#[test]
fn test_password_field_never_copies() {
    let mut field = test_field_with("secret", 0, EditConstraints::password());
    field.select_all();

    assert!(!field.copy());
    assert!(!field.cut());
    assert_eq!(field.clipboard_mut().get_text(), None);
    assert_eq!(field.content(), "secret");
}

#[test]
fn test_paste_replaces_selection_and_sanitizes() {
    let mut field = test_field_with("abc", 0, EditConstraints::single_line());
    field.clipboard_mut().set_text("x\ny");
    field.set_selection(1, 2);

    press(&mut field, KeyCommand::Paste);
    assert_eq!(field.content(), "axyc");
    assert_eq!(field.caret(), 3);
}

#[test]
fn test_paste_from_empty_clipboard_is_noop() {
    let mut field = test_field("abc", 1);
    assert!(!press(&mut field, KeyCommand::Paste));
    assert_eq!(field.content(), "abc");
}

#[test]
fn test_split_paste_uses_caret_at_completion() {
    let mut field = test_field("abc", 0);
    field.begin_paste();
    field.set_caret(3);

    assert!(field.complete_paste(Some("!".to_string())));
    assert_eq!(field.content(), "abc!");

    assert!(!field.complete_paste(None));
    assert!(!field.complete_paste(Some(String::new())));
}

#[test]
fn test_paste_result_intent() {
    let mut field = test_field("ab", 1);
    field.apply(&EditIntent::PasteResult {
        text: Some("XY".to_string()),
    });
    assert_eq!(field.content(), "aXYb");

    field.apply(&EditIntent::key(KeyCommand::Undo, Modifiers::NONE));
    assert_eq!(field.content(), "ab");
}
