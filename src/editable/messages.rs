//! Input intents accepted by the editing core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ModifierFlags", into = "ModifierFlags")]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000);

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Word-wise navigation/deletion and document-wide Home/End
    #[inline]
    pub const fn word(self) -> bool {
        self.ctrl()
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Serialized form of [`Modifiers`]: `{ ctrl: true, shift: true }`
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
struct ModifierFlags {
    #[serde(default, skip_serializing_if = "is_false")]
    ctrl: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    shift: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    alt: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    meta: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl From<ModifierFlags> for Modifiers {
    fn from(flags: ModifierFlags) -> Self {
        Modifiers::new(flags.ctrl, flags.shift, flags.alt, flags.meta)
    }
}

impl From<Modifiers> for ModifierFlags {
    fn from(m: Modifiers) -> Self {
        ModifierFlags {
            ctrl: m.ctrl(),
            shift: m.shift(),
            alt: m.alt(),
            meta: m.meta(),
        }
    }
}

/// Editing key commands. Ctrl turns Left/Right/Backspace/Delete into their
/// word variants and Home/End into document jumps; Shift extends the
/// selection on every movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommand {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Backspace,
    Delete,
    Enter,
    Tab,
    SelectAll,
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,
}

impl KeyCommand {
    /// Check if this command modifies the buffer
    pub fn is_editing(self) -> bool {
        matches!(
            self,
            KeyCommand::Backspace
                | KeyCommand::Delete
                | KeyCommand::Enter
                | KeyCommand::Tab
                | KeyCommand::Cut
                | KeyCommand::Paste
                | KeyCommand::Undo
                | KeyCommand::Redo
        )
    }

    /// Check if this command moves the caret
    pub fn is_movement(self) -> bool {
        matches!(
            self,
            KeyCommand::Left
                | KeyCommand::Right
                | KeyCommand::Up
                | KeyCommand::Down
                | KeyCommand::Home
                | KeyCommand::End
        )
    }
}

/// One unit of host input, in a form that can be stored and replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum EditIntent {
    /// Typed or committed text
    TextInput { text: String },
    /// A key command with modifiers
    Key {
        command: KeyCommand,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Pointer press at a caret offset (1 = caret, 2 = word, 3 = all)
    PointerDown {
        offset: usize,
        #[serde(default = "default_click_count")]
        click_count: u8,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Pointer drag to a caret offset
    PointerDrag { offset: usize },
    /// Clipboard text that arrived for an earlier paste request
    PasteResult { text: Option<String> },
    /// The field lost keyboard focus
    FocusLost,
}

fn default_click_count() -> u8 {
    1
}

impl EditIntent {
    pub fn key(command: KeyCommand, modifiers: Modifiers) -> Self {
        EditIntent::Key { command, modifiers }
    }

    pub fn text(text: &str) -> Self {
        EditIntent::TextInput {
            text: text.to_string(),
        }
    }

    /// Check if this intent can modify the buffer
    pub fn is_editing(&self) -> bool {
        match self {
            EditIntent::TextInput { .. } | EditIntent::PasteResult { .. } => true,
            EditIntent::Key { command, .. } => command.is_editing(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_flags() {
        let m = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(m.ctrl());
        assert!(m.shift());
        assert!(!m.alt());
        assert!(m.word());
        assert!(Modifiers::NONE.is_empty());
        assert_eq!(m.to_string(), "Ctrl+Shift");
    }

    #[test]
    fn test_modifiers_deserialize_from_flags() {
        let m: Modifiers = serde_json::from_str(r#"{"shift": true}"#).unwrap();
        assert_eq!(m, Modifiers::SHIFT);
        let json = serde_json::to_string(&Modifiers::CTRL).unwrap();
        assert_eq!(json, r#"{"ctrl":true}"#);
    }

    #[test]
    fn test_intent_yaml_form() {
        let yaml = r#"
- intent: text_input
  text: "hi"
- intent: key
  command: left
  modifiers: { ctrl: true, shift: true }
- intent: pointer_down
  offset: 3
- intent: focus_lost
"#;
        let intents: Vec<EditIntent> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(intents[0], EditIntent::text("hi"));
        assert_eq!(
            intents[1],
            EditIntent::key(KeyCommand::Left, Modifiers::CTRL | Modifiers::SHIFT)
        );
        assert_eq!(
            intents[2],
            EditIntent::PointerDown {
                offset: 3,
                click_count: 1,
                modifiers: Modifiers::NONE
            }
        );
        assert_eq!(intents[3], EditIntent::FocusLost);
    }

    #[test]
    fn test_is_editing() {
        assert!(EditIntent::text("a").is_editing());
        assert!(EditIntent::key(KeyCommand::Backspace, Modifiers::NONE).is_editing());
        assert!(!EditIntent::key(KeyCommand::Left, Modifiers::NONE).is_editing());
        assert!(KeyCommand::Home.is_movement());
        assert!(!KeyCommand::SelectAll.is_movement());
    }
}
