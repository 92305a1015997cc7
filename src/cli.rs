//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Replaying a YAML intent script against a fresh field
//! - Overriding the initial text and the config file
//! - Routing copy/cut/paste through the system clipboard

use clap::Parser;
use std::path::PathBuf;

/// Replay editing intents against a text field and print the final state
#[derive(Parser, Debug)]
#[command(
    name = "textfield",
    version,
    about = "Replay editing intents against a text field"
)]
pub struct CliArgs {
    /// YAML script with the intents to apply
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Initial text (overrides the script's text)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Config file (defaults to ~/.config/textfield/config.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Make the field read-only
    #[arg(long)]
    pub read_only: bool,

    /// Use the system clipboard instead of an in-memory one
    #[arg(long)]
    pub system_clipboard: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
