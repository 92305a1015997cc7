//! Snapshot-based undo/redo for the editing core.
//!
//! The log is an ordered list of [`UndoState`]s with a cursor pointing at the
//! state that matches the editor right now. It is seeded with the initial
//! state, so "undo" always means "step back to an earlier entry".

use std::collections::VecDeque;

use super::buffer::TextSnapshot;

/// One restorable point: the full text plus the caret.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub text: TextSnapshot,
    pub caret: usize,
}

impl UndoState {
    pub fn new(text: TextSnapshot, caret: usize) -> Self {
        Self { text, caret }
    }
}

/// Two states are the same undo point when their text is equal; the caret
/// is deliberately ignored. This is what lets caret-only moves update the top
/// entry instead of growing the log.
impl PartialEq for UndoState {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

/// Capability the log needs from its owner: read the live state and put a
/// restored one back.
pub trait UndoHost {
    fn undo_state(&self) -> UndoState;
    fn restore_undo_state(&mut self, state: UndoState);
}

/// Undo/redo log with an optional size limit.
#[derive(Debug, Clone)]
pub struct UndoLog {
    states: VecDeque<UndoState>,
    current: usize,
    limit: Option<usize>,
}

impl UndoLog {
    /// Create an unbounded log seeded with `initial`
    pub fn new(initial: UndoState) -> Self {
        Self::with_limit(initial, None)
    }

    /// Create a log keeping at most `limit` entries (at least one is always kept)
    pub fn with_limit(initial: UndoState, limit: Option<usize>) -> Self {
        let mut states = VecDeque::new();
        states.push_back(initial);
        Self {
            states,
            current: 0,
            limit: limit.map(|l| l.max(1)),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Push the host's current state unless it equals the entry at the cursor.
    /// Truncates any redo tail first. Returns true if an entry was pushed.
    pub fn snapshot<H: UndoHost + ?Sized>(&mut self, host: &H) -> bool {
        let state = host.undo_state();
        if self.states[self.current] == state {
            return false;
        }

        self.discard_redo();
        self.states.push_back(state);
        self.current = self.states.len() - 1;

        if let Some(limit) = self.limit {
            while self.states.len() > limit {
                self.states.pop_front();
                self.current -= 1;
            }
        }

        tracing::trace!(
            entries = self.states.len(),
            current = self.current,
            "undo snapshot pushed"
        );
        true
    }

    /// Record a committed edit: push a new entry if the text changed,
    /// otherwise refresh the caret of the top entry.
    pub fn record<H: UndoHost + ?Sized>(&mut self, host: &H) -> bool {
        if self.snapshot(host) {
            return true;
        }
        self.update_last_state(host);
        false
    }

    /// True if the cursor is on the newest entry
    pub fn is_last_state(&self) -> bool {
        self.current + 1 == self.states.len()
    }

    /// The newest entry, if the cursor is on it
    pub fn last_state(&self) -> Option<&UndoState> {
        if self.is_last_state() {
            self.states.back()
        } else {
            None
        }
    }

    /// Replace the top entry's caret when the host still shows the top text.
    /// Returns true if the entry was updated.
    pub fn update_last_state<H: UndoHost + ?Sized>(&mut self, host: &H) -> bool {
        if !self.is_last_state() {
            return false;
        }
        let state = host.undo_state();
        match self.states.back_mut() {
            Some(top) if *top == state => {
                top.caret = state.caret;
                true
            }
            _ => false,
        }
    }

    /// Step back one entry and restore it through the host.
    /// No-op at the oldest entry.
    pub fn undo<H: UndoHost + ?Sized>(&mut self, host: &mut H) -> Option<UndoState> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        let state = self.states[self.current].clone();
        host.restore_undo_state(state.clone());
        Some(state)
    }

    /// Step forward one entry and restore it through the host.
    /// No-op at the newest entry.
    pub fn redo<H: UndoHost + ?Sized>(&mut self, host: &mut H) -> Option<UndoState> {
        if self.is_last_state() {
            return None;
        }
        self.current += 1;
        let state = self.states[self.current].clone();
        host.restore_undo_state(state.clone());
        Some(state)
    }

    /// Drop every entry after the cursor
    pub fn discard_redo(&mut self) {
        self.states.truncate(self.current + 1);
    }

    /// Forget all history and start over from `state`
    pub fn reset(&mut self, state: UndoState) {
        self.states.clear();
        self.states.push_back(state);
        self.current = 0;
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.is_last_state()
    }

    /// Number of steps available to undo
    pub fn undo_count(&self) -> usize {
        self.current
    }

    /// Number of steps available to redo
    pub fn redo_count(&self) -> usize {
        self.states.len() - 1 - self.current
    }

    /// Total number of entries, the seed included
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Host {
        text: String,
        caret: usize,
    }

    impl Host {
        fn set(&mut self, text: &str, caret: usize) {
            self.text = text.to_string();
            self.caret = caret;
        }
    }

    impl UndoHost for Host {
        fn undo_state(&self) -> UndoState {
            UndoState::new(TextSnapshot::from_text(&self.text), self.caret)
        }

        fn restore_undo_state(&mut self, state: UndoState) {
            self.text = state.text.content();
            self.caret = state.caret;
        }
    }

    fn seeded(host: &Host) -> UndoLog {
        UndoLog::new(host.undo_state())
    }

    #[test]
    fn test_equality_ignores_caret() {
        let a = UndoState::new(TextSnapshot::from_text("abc"), 0);
        let b = UndoState::new(TextSnapshot::from_text("abc"), 3);
        let c = UndoState::new(TextSnapshot::from_text("abd"), 0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_snapshot_dedups_same_text() {
        let mut host = Host::default();
        let mut log = seeded(&host);

        host.caret = 0;
        assert!(!log.snapshot(&host));
        assert_eq!(log.len(), 1);

        host.set("a", 1);
        assert!(log.snapshot(&host));
        assert_eq!(log.len(), 2);
        assert!(log.can_undo());
    }

    #[test]
    fn test_undo_redo_restore_through_host() {
        let mut host = Host::default();
        let mut log = seeded(&host);

        host.set("a", 1);
        log.record(&host);
        host.set("ab", 2);
        log.record(&host);

        let restored = log.undo(&mut host).unwrap();
        assert_eq!(restored.caret, 1);
        assert_eq!(host.text, "a");

        log.undo(&mut host);
        assert_eq!(host.text, "");
        assert_eq!(host.caret, 0);

        assert!(log.undo(&mut host).is_none());
        assert_eq!(host.text, "");

        log.redo(&mut host);
        log.redo(&mut host);
        assert_eq!(host.text, "ab");
        assert_eq!(host.caret, 2);
        assert!(log.redo(&mut host).is_none());
    }

    #[test]
    fn test_record_after_undo_discards_redo() {
        let mut host = Host::default();
        let mut log = seeded(&host);

        host.set("a", 1);
        log.record(&host);
        log.undo(&mut host);
        assert!(log.can_redo());

        host.set("b", 1);
        log.record(&host);
        assert!(!log.can_redo());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_update_last_state_only_moves_caret() {
        let mut host = Host::default();
        let mut log = seeded(&host);

        host.set("hello", 5);
        log.record(&host);

        host.caret = 2;
        assert!(log.update_last_state(&host));
        assert_eq!(log.len(), 2);
        assert_eq!(log.last_state().unwrap().caret, 2);

        host.set("hellox", 6);
        assert!(!log.update_last_state(&host));
    }

    #[test]
    fn test_update_last_state_ignored_after_undo() {
        let mut host = Host::default();
        let mut log = seeded(&host);

        host.set("a", 1);
        log.record(&host);
        log.undo(&mut host);

        host.caret = 0;
        assert!(!log.update_last_state(&host));
        assert!(log.last_state().is_none());
    }

    #[test]
    fn test_record_same_text_updates_caret() {
        let mut host = Host::default();
        host.set("abc", 3);
        let mut log = seeded(&host);

        host.caret = 1;
        assert!(!log.record(&host));
        log.undo(&mut host);
        assert_eq!(log.last_state().unwrap().caret, 1);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut host = Host::default();
        let mut log = UndoLog::with_limit(host.undo_state(), Some(3));

        for (i, text) in ["a", "ab", "abc", "abcd"].iter().enumerate() {
            host.set(text, i + 1);
            log.record(&host);
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.undo_count(), 2);
        log.undo(&mut host);
        log.undo(&mut host);
        assert_eq!(host.text, "ab");
        assert!(!log.can_undo());
    }

    #[test]
    fn test_discard_redo_and_reset() {
        let mut host = Host::default();
        let mut log = seeded(&host);

        host.set("a", 1);
        log.record(&host);
        log.undo(&mut host);
        assert_eq!(log.redo_count(), 1);

        log.discard_redo();
        assert_eq!(log.redo_count(), 0);

        log.reset(UndoState::new(TextSnapshot::from_text("fresh"), 5));
        assert_eq!(log.len(), 1);
        assert!(!log.can_undo());
        assert!(!log.can_redo());
    }
}
