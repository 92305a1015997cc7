//! Field configuration persistence
//!
//! Stores field defaults in `~/.config/textfield/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::{EditConstraints, LayoutMetrics, LineEnding, TextWrapping, WordBreaks};

/// Field configuration. Every key is optional in the YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub read_only: bool,
    pub accepts_return: bool,
    pub accepts_tab: bool,
    /// Maximum length in chars (None = unlimited)
    pub max_length: Option<usize>,
    pub undo_enabled: bool,
    /// Maximum number of undo entries (None = unlimited)
    pub undo_limit: Option<usize>,
    /// Accept digits only
    pub numeric: bool,
    pub conceal: bool,
    pub word_breaks: WordBreaks,
    pub text_wrapping: TextWrapping,
    pub line_ending: LineEnding,
    pub layout: LayoutMetrics,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            read_only: false,
            accepts_return: true,
            accepts_tab: true,
            max_length: None,
            undo_enabled: true,
            undo_limit: None,
            numeric: false,
            conceal: false,
            word_breaks: WordBreaks::default(),
            text_wrapping: TextWrapping::default(),
            line_ending: LineEnding::default(),
            layout: LayoutMetrics::default(),
        }
    }
}

impl FieldConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file parses as YAML null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Write config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Constraints for a field built from this config
    pub fn constraints(&self) -> EditConstraints {
        let base = if self.numeric {
            EditConstraints::numeric()
        } else {
            EditConstraints::default()
        };

        EditConstraints {
            read_only: self.read_only,
            accepts_return: self.accepts_return,
            accepts_tab: self.accepts_tab,
            enable_undo: self.undo_enabled,
            undo_limit: self.undo_limit,
            max_length: self.max_length.or(base.max_length),
            conceal: self.conceal,
            line_ending: self.line_ending,
            char_filter: base.char_filter,
        }
    }

    /// Layout metrics with the wrap column dropped when wrapping is off
    pub fn layout_metrics(&self) -> LayoutMetrics {
        match self.text_wrapping {
            TextWrapping::Wrap => self.layout,
            TextWrapping::NoWrap => LayoutMetrics {
                wrap_column: None,
                ..self.layout
            },
        }
    }
}
