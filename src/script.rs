//! Replayable intent scripts.
//!
//! A script is a YAML document with an optional starting text and caret, the
//! list of intents to apply, and optional expectations about the final state:
//!
//! ```yaml
//! text: "hello world"
//! caret: 11
//! intents:
//!   - intent: key
//!     command: backspace
//!     modifiers: { ctrl: true }
//! expect:
//!   text: "hello "
//!   caret: 6
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::{EditEngine, EditIntent};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    /// Starting text; the engine's text is kept when absent
    pub text: Option<String>,
    /// Starting caret
    pub caret: Option<usize>,
    pub intents: Vec<EditIntent>,
    pub expect: Option<Expectation>,
}

/// Checks run against the final state. Absent keys are not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expectation {
    pub text: Option<String>,
    pub caret: Option<usize>,
    /// `[anchor, active]`
    pub selection: Option<(usize, usize)>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse script {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply the script to `engine`. Returns how many intents changed state.
    pub fn run(&self, engine: &mut EditEngine) -> usize {
        if let Some(text) = &self.text {
            engine.set_text(text);
        }
        if let Some(caret) = self.caret {
            engine.set_caret(caret);
        }

        let mut changed = 0;
        for (i, intent) in self.intents.iter().enumerate() {
            if engine.apply(intent) {
                changed += 1;
            } else {
                tracing::debug!(index = i, ?intent, "intent left the field unchanged");
            }
        }

        tracing::info!(
            intents = self.intents.len(),
            changed,
            "script replayed"
        );
        changed
    }
}

impl Expectation {
    /// Fail with a description of the first mismatch
    pub fn check(&self, engine: &EditEngine) -> Result<()> {
        if let Some(text) = &self.text {
            let actual = engine.content();
            if &actual != text {
                bail!("expected text {:?}, got {:?}", text, actual);
            }
        }
        if let Some(caret) = self.caret {
            if engine.caret() != caret {
                bail!("expected caret {}, got {}", caret, engine.caret());
            }
        }
        if let Some((anchor, active)) = self.selection {
            let selection = engine.selection();
            if (selection.anchor, selection.active) != (anchor, active) {
                bail!(
                    "expected selection {}..{}, got {}..{}",
                    anchor,
                    active,
                    selection.anchor,
                    selection.active
                );
            }
        }
        Ok(())
    }
}
