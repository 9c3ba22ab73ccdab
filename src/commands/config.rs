//! Config command - show and set global preferences

use std::io::Write;

use acro::config::GlobalConfig;
use acro::output::{OperationResult, OutputMode, Render};
use anyhow::Context as _;

use super::Context;
use crate::cli::ConfigAction;

/// Handle `acro config show|set`
pub fn config_cmd(ctx: &Context, action: ConfigAction) -> anyhow::Result<()> {
    let out = &mut std::io::stdout().lock();
    match action {
        ConfigAction::Show => show(&ctx.config, ctx.output_mode, out),
        ConfigAction::Set { key, value } => {
            let mut config = ctx.config.clone();
            let message = set(&mut config, &key, &value)?;
            config.save().with_context(|| {
                format!("saving config to {}", GlobalConfig::config_path().display())
            })?;
            OperationResult::ok(message).render_to(ctx.output_mode, out)?;
            Ok(())
        },
    }
}

fn show(config: &GlobalConfig, mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    match mode {
        OutputMode::Human => {
            writeln!(out, "# {}", GlobalConfig::config_path().display())?;
            write!(out, "{}", toml::to_string_pretty(config)?)?;
        },
        OutputMode::Json => writeln!(out, "{}", serde_json::to_string_pretty(config)?)?,
    }
    Ok(())
}

fn set(config: &mut GlobalConfig, key: &str, value: &str) -> anyhow::Result<String> {
    config.set(key, value).map_err(|e| anyhow::anyhow!(e))?;
    Ok(format!("Set {key} = {value:?}"))
}
