//! textfield - plain-text editing core
//!
//! This crate provides the text, caret, selection and undo model behind a
//! single text field, plus a small replay tool that drives it from YAML
//! intent scripts.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod script;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::FieldConfig;
pub use editable::{EditConstraints, EditEngine, EditIntent, FieldState};
pub use script::Script;
