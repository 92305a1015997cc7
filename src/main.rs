use anyhow::{Context, Result};
use clap::Parser;

use textfield::cli::CliArgs;
use textfield::editable::{EditEngine, SystemClipboard};
use textfield::script::Script;
use textfield::FieldConfig;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    textfield::tracing::init();

    let mut config = match &args.config {
        Some(path) => FieldConfig::load_from(path)?,
        None => FieldConfig::load(),
    };
    if args.read_only {
        config.read_only = true;
    }

    let script = match &args.script {
        Some(path) => Script::load(path)?,
        None => Script::default(),
    };

    let text = args
        .text
        .as_deref()
        .or(script.text.as_deref())
        .unwrap_or_default();

    let mut engine = EditEngine::from_config(text, &config);
    if args.system_clipboard {
        engine = engine.with_clipboard(SystemClipboard);
    }

    // The initial text is already in place; only the caret is taken from the script
    let replay = Script {
        text: None,
        ..script
    };
    replay.run(&mut engine);

    let state = engine.state();
    let json = if args.pretty {
        serde_json::to_string_pretty(&state)
    } else {
        serde_json::to_string(&state)
    }
    .context("Failed to serialize field state")?;
    println!("{}", json);

    if let Some(expect) = &replay.expect {
        expect.check(&engine)?;
    }

    Ok(())
}
