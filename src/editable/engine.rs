//! EditEngine - resolves editing intents against the text, the caret and the
//! undo log.
//!
//! Every intent runs to completion before the next one: the text is replaced,
//! caret and selection are re-coerced, and the undo log is updated. Mutations
//! record a new undo entry; caret-only changes refresh the caret of the
//! newest entry instead.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::tracing::FieldSnapshot;

use super::buffer::{TextBuffer, TextSnapshot};
use super::caret::CaretState;
use super::clipboard::{ClipboardService, MemoryClipboard};
use super::constraints::EditConstraints;
use super::history::{UndoHost, UndoLog, UndoState};
use super::layout::{line_index_at, line_start, MonospaceLayout, Point, TextLayout, TextWrapping};
use super::messages::{EditIntent, KeyCommand, Modifiers};
use super::selection::Selection;
use super::word::{self, WordBreaks};

/// The `(text, caret, selection)` tuple exposed to hosts.
/// `selection_start` is the anchor and `selection_end` the active end; they
/// are not ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub text: String,
    pub caret: usize,
    pub selection_start: usize,
    pub selection_end: usize,
}

/// Change notifications delivered to listeners registered with
/// [`EditEngine::subscribe`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    TextChanged,
    SelectionChanged { caret: usize, selection: Selection },
    CanScrollHorizontallyChanged(bool),
}

pub type FieldListener = Box<dyn FnMut(&FieldEvent)>;

/// Text plus caret: the part of the engine the undo log snapshots.
#[derive(Debug, Clone, Default)]
struct Session {
    buffer: TextBuffer,
    caret: CaretState,
}

impl UndoHost for Session {
    fn undo_state(&self) -> UndoState {
        UndoState::new(self.buffer.snapshot(), self.caret.caret())
    }

    fn restore_undo_state(&mut self, state: UndoState) {
        self.buffer.restore(state.text);
        self.caret = CaretState::at(state.caret, self.buffer.text());
    }
}

/// Editing session for one text field.
pub struct EditEngine {
    session: Session,
    history: UndoLog,
    /// Constraints for this field
    pub constraints: EditConstraints,
    word_breaks: WordBreaks,
    text_wrapping: TextWrapping,
    can_scroll_horizontally: bool,
    /// Horizontal position kept across consecutive vertical moves
    desired_x: Option<f32>,
    layout: Box<dyn TextLayout>,
    clipboard: Box<dyn ClipboardService>,
    listeners: Vec<FieldListener>,
}

impl fmt::Debug for EditEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditEngine")
            .field("text", self.session.buffer.text())
            .field("caret", &self.session.caret)
            .field("history", &self.history)
            .field("constraints", &self.constraints)
            .field("word_breaks", &self.word_breaks)
            .field("text_wrapping", &self.text_wrapping)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl EditEngine {
    /// Create an engine over `text` with the caret at 0
    pub fn new(text: &str, constraints: EditConstraints) -> Self {
        let session = Session {
            buffer: TextBuffer::from_text(text),
            caret: CaretState::new(),
        };
        let history = UndoLog::with_limit(session.undo_state(), constraints.undo_limit);
        Self {
            session,
            history,
            constraints,
            word_breaks: WordBreaks::default(),
            text_wrapping: TextWrapping::default(),
            can_scroll_horizontally: true,
            desired_x: None,
            layout: Box::new(MonospaceLayout::default()),
            clipboard: Box::new(MemoryClipboard::new()),
            listeners: Vec::new(),
        }
    }

    /// Create an engine configured from a [`FieldConfig`]
    pub fn from_config(text: &str, config: &FieldConfig) -> Self {
        let mut engine = Self::new(text, config.constraints())
            .with_word_breaks(config.word_breaks)
            .with_layout(MonospaceLayout::new(config.layout_metrics()));
        engine.set_text_wrapping(config.text_wrapping);
        engine
    }

    pub fn with_layout(mut self, layout: impl TextLayout + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    pub fn with_clipboard(mut self, clipboard: impl ClipboardService + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    pub fn with_word_breaks(mut self, word_breaks: WordBreaks) -> Self {
        self.word_breaks = word_breaks;
        self
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl FnMut(&FieldEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // === Queries ===

    /// Current text snapshot
    pub fn text(&self) -> &TextSnapshot {
        self.session.buffer.text()
    }

    /// Current text as a String
    pub fn content(&self) -> String {
        self.text().content()
    }

    pub fn caret(&self) -> usize {
        self.session.caret.caret()
    }

    pub fn selection(&self) -> Selection {
        self.session.caret.selection()
    }

    pub fn has_selection(&self) -> bool {
        self.session.caret.has_selection()
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        self.session.caret.selected_text(self.session.buffer.text())
    }

    pub fn state(&self) -> FieldState {
        let selection = self.selection();
        FieldState {
            text: self.content(),
            caret: self.caret(),
            selection_start: selection.anchor,
            selection_end: selection.active,
        }
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.constraints.enable_undo && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.constraints.enable_undo && self.history.can_redo()
    }

    pub fn is_read_only(&self) -> bool {
        self.constraints.read_only
    }

    pub fn word_breaks(&self) -> WordBreaks {
        self.word_breaks
    }

    pub fn text_wrapping(&self) -> TextWrapping {
        self.text_wrapping
    }

    pub fn can_scroll_horizontally(&self) -> bool {
        self.can_scroll_horizontally
    }

    pub fn clipboard_mut(&mut self) -> &mut dyn ClipboardService {
        self.clipboard.as_mut()
    }

    // === Host-side setters ===

    /// Replace the whole text from outside the editing flow. Caret and
    /// selection are re-coerced and the undo history starts over.
    pub fn set_text(&mut self, text: &str) {
        self.session.buffer.set_text(text);
        self.session.caret.recoerce(self.session.buffer.text());
        self.history.reset(self.session.undo_state());
        self.desired_x = None;
        self.emit(FieldEvent::TextChanged);
        self.emit_selection();
    }

    /// Place the caret, collapsing the selection
    pub fn set_caret(&mut self, offset: usize) -> bool {
        self.move_caret_to(offset, false)
    }

    /// Set both selection ends; the caret follows the active end
    pub fn set_selection(&mut self, anchor: usize, active: usize) -> bool {
        let before = self.session.caret;
        self.session
            .caret
            .set_selection(anchor, active, self.session.buffer.text());
        self.desired_x = None;
        self.after_caret_change(before)
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.constraints.read_only = read_only;
    }

    /// Change the wrapping mode and recompute the derived scroll capability.
    ///
    /// Only the mode is tracked here. Wrap geometry comes from the layout:
    /// pass a [`MonospaceLayout`] built with a wrap column through
    /// [`Self::with_layout`], or use [`Self::from_config`] which does both.
    pub fn set_text_wrapping(&mut self, wrapping: TextWrapping) {
        self.text_wrapping = wrapping;
        let can_scroll = wrapping == TextWrapping::NoWrap;
        if can_scroll != self.can_scroll_horizontally {
            self.can_scroll_horizontally = can_scroll;
            self.emit(FieldEvent::CanScrollHorizontallyChanged(can_scroll));
        }
    }

    // === Notifications ===

    fn emit(&mut self, event: FieldEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    fn emit_selection(&mut self) {
        let event = FieldEvent::SelectionChanged {
            caret: self.caret(),
            selection: self.selection(),
        };
        self.emit(event);
    }

    /// Bookkeeping after caret/selection moved without a text change.
    /// Returns true if anything changed.
    fn after_caret_change(&mut self, before: CaretState) -> bool {
        if self.session.caret == before {
            return false;
        }
        if self.constraints.enable_undo {
            self.history.update_last_state(&self.session);
        }
        self.emit_selection();
        true
    }
}

// =============================================================================
// Input surface
// =============================================================================

impl EditEngine {
    /// Apply one intent. Returns true if text, caret or selection changed.
    pub fn apply(&mut self, intent: &EditIntent) -> bool {
        match intent {
            EditIntent::TextInput { text } => self.on_text_input(text),
            EditIntent::Key { command, modifiers } => self.on_key_command(*command, *modifiers),
            EditIntent::PointerDown {
                offset,
                click_count,
                modifiers,
            } => self.on_pointer_down(*offset, *click_count, *modifiers),
            EditIntent::PointerDrag { offset } => self.on_pointer_drag(*offset),
            EditIntent::PasteResult { text } => {
                self.begin_paste();
                self.complete_paste(text.clone())
            }
            EditIntent::FocusLost => self.on_focus_lost(),
        }
    }

    /// Typed or committed text
    pub fn on_text_input(&mut self, text: &str) -> bool {
        self.insert_text(text)
    }

    /// Dispatch a key command. Ctrl selects word/document variants, Shift
    /// extends the selection.
    pub fn on_key_command(&mut self, command: KeyCommand, modifiers: Modifiers) -> bool {
        let before = if tracing::enabled!(tracing::Level::TRACE) {
            Some(FieldSnapshot::capture(self))
        } else {
            None
        };

        let extend = modifiers.shift();
        let word = modifiers.word();
        let changed = match command {
            KeyCommand::Left => self.move_horizontal(-1, word, extend),
            KeyCommand::Right => self.move_horizontal(1, word, extend),
            KeyCommand::Up => self.move_vertical(-1, extend),
            KeyCommand::Down => self.move_vertical(1, extend),
            KeyCommand::Home => self.move_home(word, extend),
            KeyCommand::End => self.move_end(word, extend),
            KeyCommand::Backspace if word && !self.has_selection() => self.delete_word_backward(),
            KeyCommand::Backspace => self.delete_backward(),
            KeyCommand::Delete if word && !self.has_selection() => self.delete_word_forward(),
            KeyCommand::Delete => self.delete_forward(),
            KeyCommand::Enter => self.insert_newline(),
            KeyCommand::Tab if modifiers.is_empty() => self.insert_tab(),
            KeyCommand::Tab => false,
            KeyCommand::SelectAll => self.select_all(),
            KeyCommand::Copy => {
                self.copy();
                false
            }
            KeyCommand::Cut => self.cut(),
            KeyCommand::Paste => self.paste(),
            KeyCommand::Undo => self.undo(),
            KeyCommand::Redo => self.redo(),
        };

        if let Some(before) = before {
            if let Some(diff) = before.diff(&FieldSnapshot::capture(self)) {
                tracing::trace!(target: "selection", ?command, %modifiers, "{}", diff);
            }
        }

        changed
    }

    /// Pointer press at `offset`: 1 click places the caret (Shift extends),
    /// 2 selects the word, 3 or more select everything.
    pub fn on_pointer_down(&mut self, offset: usize, click_count: u8, modifiers: Modifiers) -> bool {
        match click_count {
            0 | 1 => self.move_caret_to(offset, modifiers.shift()),
            2 => self.select_word_at(offset),
            _ => self.select_all(),
        }
    }

    /// Pointer drag: move the active end of the selection to `offset`
    pub fn on_pointer_drag(&mut self, offset: usize) -> bool {
        self.move_caret_to(offset, true)
    }

    /// [`Self::on_pointer_down`] at a point, resolved through the layout
    pub fn on_pointer_down_at(&mut self, point: Point, click_count: u8, modifiers: Modifiers) -> bool {
        let hit = self.layout.hit_test_point(self.session.buffer.text(), point);
        self.on_pointer_down(hit.caret_offset(), click_count, modifiers)
    }

    /// [`Self::on_pointer_drag`] at a point, resolved through the layout
    pub fn on_pointer_drag_at(&mut self, point: Point) -> bool {
        let hit = self.layout.hit_test_point(self.session.buffer.text(), point);
        self.on_pointer_drag(hit.caret_offset())
    }

    /// Focus left the field: drop the selection, keep the caret
    pub fn on_focus_lost(&mut self) -> bool {
        let before = self.session.caret;
        self.session.caret.clear_selection_to_caret();
        self.after_caret_change(before)
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl EditEngine {
    /// Move the caret to `offset`. With `extend` only the active end of the
    /// selection follows; otherwise the selection collapses onto the caret.
    fn move_caret_to(&mut self, offset: usize, extend: bool) -> bool {
        self.desired_x = None;
        self.place_caret(offset, extend)
    }

    fn place_caret(&mut self, offset: usize, extend: bool) -> bool {
        let before = self.session.caret;
        let text = self.session.buffer.text();
        self.session.caret.set_caret(offset, text);
        if extend {
            let caret = self.session.caret.caret();
            self.session.caret.set_active(caret, text);
        } else {
            self.session.caret.clear_selection_to_caret();
        }
        self.after_caret_change(before)
    }

    /// One step left/right (`direction` < 0 is left). Char steps treat CR+LF
    /// as a single unit; word steps jump to the previous/next word start.
    pub fn move_horizontal(&mut self, direction: isize, whole_word: bool, extend: bool) -> bool {
        let caret = self.caret();
        let text = self.session.buffer.text();

        let target = if whole_word {
            if direction < 0 {
                word::previous_word_start(text, caret, self.word_breaks)
            } else {
                word::next_word_start(text, caret, self.word_breaks)
            }
        } else {
            let selection = self.selection();
            if !extend && !selection.is_empty() {
                // Collapse to the selection edge in the direction of travel
                let edge = if direction < 0 {
                    selection.start()
                } else {
                    selection.end()
                };
                return self.move_caret_to(edge, false);
            }

            if direction < 0 {
                let mut target = caret.saturating_sub(1);
                if text.splits_crlf(target) {
                    target -= 1;
                }
                target
            } else {
                // Coercion carries a step onto an LF past it
                caret + 1
            }
        };

        self.move_caret_to(target, extend)
    }

    /// Move cursor left by one character
    pub fn move_left(&mut self, extend_selection: bool) -> bool {
        self.move_horizontal(-1, false, extend_selection)
    }

    /// Move cursor right by one character
    pub fn move_right(&mut self, extend_selection: bool) -> bool {
        self.move_horizontal(1, false, extend_selection)
    }

    /// Move cursor by one word to the left
    pub fn move_word_left(&mut self, extend_selection: bool) -> bool {
        self.move_horizontal(-1, true, extend_selection)
    }

    /// Move cursor by one word to the right
    pub fn move_word_right(&mut self, extend_selection: bool) -> bool {
        self.move_horizontal(1, true, extend_selection)
    }

    /// Move `count` visual lines (negative is up), keeping the horizontal
    /// position of the first vertical move in a row. Stays put on the
    /// first/last line.
    pub fn move_vertical(&mut self, count: isize, extend: bool) -> bool {
        let text = self.session.buffer.snapshot();
        let caret = self.caret();
        let lines = self.layout.lines(&text);
        let target_line = line_index_at(&lines, caret) as isize + count;

        if count == 0 || target_line < 0 || target_line >= lines.len() as isize {
            let desired_x = self.desired_x;
            let changed = self.place_caret(caret, extend);
            self.desired_x = desired_x;
            return changed;
        }

        let rect = self.layout.hit_test_offset(&text, caret);
        let x = self.desired_x.unwrap_or(rect.x);
        let line_height = lines[target_line as usize].height;
        let y = rect.y + rect.height / 2.0 + count as f32 * line_height;
        let hit = self.layout.hit_test_point(&text, Point::new(x, y));

        let changed = self.place_caret(hit.caret_offset(), extend);
        self.desired_x = Some(x);
        changed
    }

    /// Move cursor up by one line
    pub fn move_up(&mut self, extend_selection: bool) -> bool {
        self.move_vertical(-1, extend_selection)
    }

    /// Move cursor down by one line
    pub fn move_down(&mut self, extend_selection: bool) -> bool {
        self.move_vertical(1, extend_selection)
    }

    /// Start of the visual line, or of the document with `document`
    pub fn move_home(&mut self, document: bool, extend: bool) -> bool {
        let target = if document {
            0
        } else {
            let lines = self.layout.lines(self.session.buffer.text());
            line_start(&lines, line_index_at(&lines, self.caret()))
        };
        self.move_caret_to(target, extend)
    }

    /// End of the visual line (before its terminator), or of the document
    /// with `document`
    pub fn move_end(&mut self, document: bool, extend: bool) -> bool {
        let target = if document {
            self.text().len_chars()
        } else {
            let lines = self.layout.lines(self.session.buffer.text());
            let index = line_index_at(&lines, self.caret());
            let Some(&line) = lines.get(index) else {
                return self.move_caret_to(self.text().len_chars(), extend);
            };
            let end = line_start(&lines, index) + line.length;
            if line.newline_length > 0 {
                end - line.newline_length
            } else if index + 1 < lines.len() {
                // Soft-wrapped segment: its end offset is drawn at the start
                // of the next visual line
                end - 1
            } else {
                end
            }
        };
        self.move_caret_to(target, extend)
    }

    /// Select all text
    pub fn select_all(&mut self) -> bool {
        let before = self.session.caret;
        self.session.caret.select_all(self.session.buffer.text());
        self.desired_x = None;
        self.after_caret_change(before)
    }

    /// Select the word at the caret
    pub fn select_word(&mut self) -> bool {
        self.select_word_at(self.caret())
    }

    fn select_word_at(&mut self, offset: usize) -> bool {
        let offset = self.text().coerce(offset);
        let range = word::word_range_at(self.text(), offset, self.word_breaks);
        self.set_selection(range.start, range.end)
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl EditEngine {
    /// Replace `range` with `fragment`, leave the caret after the fragment
    /// and record the edit.
    fn replace_range(&mut self, range: Range<usize>, fragment: &str) -> bool {
        if range.is_empty() && fragment.is_empty() {
            return false;
        }

        let caret = range.start + fragment.chars().count();
        self.session.buffer.replace(range, fragment);
        self.session.caret.set_caret(caret, self.session.buffer.text());
        self.session.caret.clear_selection_to_caret();
        self.desired_x = None;

        if self.constraints.enable_undo {
            self.history.record(&self.session);
        }

        self.emit(FieldEvent::TextChanged);
        self.emit_selection();
        true
    }

    fn reject_read_only(&self, operation: &str) -> bool {
        if self.constraints.read_only {
            tracing::debug!("{} ignored: field is read-only", operation);
            return true;
        }
        false
    }

    /// Insert text at the caret, replacing the selection.
    /// Returns true if the text was inserted, false if rejected by constraints.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if self.reject_read_only("insert_text") {
            return false;
        }

        let input = self.constraints.sanitize(text);
        if input.is_empty() {
            return false;
        }
        if let Some(ch) = input.chars().find(|&c| !self.constraints.is_char_allowed(c)) {
            tracing::debug!("insert_text rejected: {:?} not allowed", ch);
            return false;
        }

        let selection = self.selection();
        let insert_len = input.chars().count();
        if self.constraints.would_exceed_max_length(
            self.text().len_chars(),
            selection.len(),
            insert_len,
        ) {
            tracing::debug!("insert_text rejected: max length exceeded");
            return false;
        }

        let range = if selection.is_empty() {
            let caret = self.caret();
            caret..caret
        } else {
            selection.range()
        };

        let changed = self.replace_range(range, &input);
        if self.constraints.enable_undo {
            self.history.discard_redo();
        }
        changed
    }

    /// Insert a character at the caret
    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf))
    }

    /// Enter: insert the configured line ending in fields that accept returns
    pub fn insert_newline(&mut self) -> bool {
        if !self.constraints.accepts_return {
            return false;
        }
        self.insert_text(self.constraints.line_ending.as_str())
    }

    /// Tab: insert `\t` in fields that accept tabs
    pub fn insert_tab(&mut self) -> bool {
        if !self.constraints.accepts_tab {
            return false;
        }
        self.insert_text("\t")
    }

    /// Delete selection if any
    fn delete_selection(&mut self) -> bool {
        let selection = self.selection();
        if selection.is_empty() {
            return false;
        }
        self.replace_range(selection.range(), "")
    }

    /// Delete the selection, or the character (CR+LF pair) before the caret
    pub fn delete_backward(&mut self) -> bool {
        if self.reject_read_only("delete_backward") {
            return false;
        }
        if self.has_selection() {
            return self.delete_selection();
        }
        let span = self.session.buffer.character_span_before(self.caret());
        self.replace_range(span, "")
    }

    /// Delete the selection, or the character (CR+LF pair) at the caret
    pub fn delete_forward(&mut self) -> bool {
        if self.reject_read_only("delete_forward") {
            return false;
        }
        if self.has_selection() {
            return self.delete_selection();
        }
        let span = self.session.buffer.character_span_at(self.caret());
        self.replace_range(span, "")
    }

    /// Delete from the previous word start to the caret
    pub fn delete_word_backward(&mut self) -> bool {
        if self.reject_read_only("delete_word_backward") {
            return false;
        }
        if self.has_selection() {
            return self.delete_backward();
        }

        let caret = self.caret();
        let start = word::previous_word_start(self.text(), caret, self.word_breaks);
        self.session
            .caret
            .set_selection(caret, start, self.session.buffer.text());
        self.delete_backward()
    }

    /// Delete from the caret to the next word start, keeping one trailing
    /// space unless the space is all there is to delete
    pub fn delete_word_forward(&mut self) -> bool {
        if self.reject_read_only("delete_word_forward") {
            return false;
        }
        if self.has_selection() {
            return self.delete_forward();
        }

        let caret = self.caret();
        let end = word::next_word_start(self.text(), caret, self.word_breaks);
        self.session
            .caret
            .set_selection(caret, end, self.session.buffer.text());

        let selected = self.selected_text();
        if selected != " " && selected.ends_with(' ') {
            self.session
                .caret
                .set_active(end - 1, self.session.buffer.text());
        }
        self.delete_forward()
    }

    /// Undo the last edit. No-op at the start of the history.
    pub fn undo(&mut self) -> bool {
        if !self.constraints.enable_undo || self.reject_read_only("undo") {
            return false;
        }
        match self.history.undo(&mut self.session) {
            Some(_) => {
                self.desired_x = None;
                self.emit(FieldEvent::TextChanged);
                self.emit_selection();
                true
            }
            None => false,
        }
    }

    /// Redo the last undone edit. No-op at the end of the history.
    pub fn redo(&mut self) -> bool {
        if !self.constraints.enable_undo || self.reject_read_only("redo") {
            return false;
        }
        match self.history.redo(&mut self.session) {
            Some(_) => {
                self.desired_x = None;
                self.emit(FieldEvent::TextChanged);
                self.emit_selection();
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Clipboard Operations
// =============================================================================

impl EditEngine {
    /// Copy the selection to the clipboard. Returns true if anything was copied.
    pub fn copy(&mut self) -> bool {
        if self.constraints.conceal || !self.has_selection() {
            return false;
        }
        let text = self.selected_text();
        self.clipboard.set_text(&text);
        true
    }

    /// Copy the selection, then delete it
    pub fn cut(&mut self) -> bool {
        if self.reject_read_only("cut") || !self.copy() {
            return false;
        }
        self.delete_selection()
    }

    /// First half of a paste: snapshot the undo log so the paste undoes as
    /// one step.
    pub fn begin_paste(&mut self) {
        if self.constraints.enable_undo && !self.constraints.read_only {
            self.history.snapshot(&self.session);
        }
    }

    /// Second half of a paste: insert the clipboard text at the caret as it is
    /// now. `None` or empty text changes nothing.
    pub fn complete_paste(&mut self, text: Option<String>) -> bool {
        match text {
            Some(text) if !text.is_empty() => self.insert_text(&text),
            _ => {
                tracing::debug!("paste yielded no text");
                false
            }
        }
    }

    /// Paste synchronously from the engine's clipboard service
    pub fn paste(&mut self) -> bool {
        if self.reject_read_only("paste") {
            return false;
        }
        self.begin_paste();
        let text = self.clipboard.get_text();
        self.complete_paste(text)
    }
}
