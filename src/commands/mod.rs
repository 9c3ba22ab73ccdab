//! Command implementations
//!
//! Handlers write to an explicit `&mut dyn Write` so the interactive menus
//! can reuse them between prompts. The public wrappers target stdout.

mod acronym;
mod company;
mod config;
mod menu;
#[cfg(feature = "net")]
mod net;

use std::io::{self, Write};

use acro::acronym::{AcronymStore, MatchMode};
use acro::config::GlobalConfig;
use acro::output::{OperationResult, OutputMode, Render};
use acro::prompt::Prompter;

pub use company::company_cmd;
pub use config::config_cmd;
#[cfg(feature = "net")]
pub use net::{astros, weather};

/// Everything a command needs, resolved once in `cli::run`
#[derive(Debug)]
pub struct Context {
    /// The glossary
    pub store: AcronymStore,
    /// Loaded global config
    pub config: GlobalConfig,
    /// Default lookup matching
    pub match_mode: MatchMode,
    /// Human or JSON output
    pub output_mode: OutputMode,
}

/// Look up an acronym
pub fn lookup(ctx: &Context, query: &str, match_mode: MatchMode) -> anyhow::Result<()> {
    acronym::lookup(ctx, query, match_mode, &mut io::stdout().lock())
}

/// Add an acronym
pub fn add(ctx: &Context, acronym: &str, definition: &str) -> anyhow::Result<()> {
    acronym::add(ctx, acronym, definition, &mut io::stdout().lock())
}

/// Remove an acronym
pub fn remove(ctx: &Context, acronym: &str) -> anyhow::Result<()> {
    acronym::remove(ctx, acronym, &mut io::stdout().lock())
}

/// List the glossary
pub fn list(ctx: &Context) -> anyhow::Result<()> {
    acronym::list(ctx, &mut io::stdout().lock())
}

/// Interactive acronym menu on stdin/stdout
pub fn menu(ctx: &Context) -> anyhow::Result<()> {
    menu::acronym_menu(ctx, &mut Prompter::stdio())
}

/// Report a non-fatal library error as a message, or pass the rest on
///
/// `describe` returns the user-facing message for errors that are only
/// reported; anything it declines propagates.
fn report_soft(
    err: acro::Error,
    describe: impl FnOnce(&acro::Error) -> Option<String>,
    mode: OutputMode,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match describe(&err) {
        Some(message) if err.is_soft() => {
            log::debug!("{err}");
            OperationResult::failed(message).render_to(mode, out)?;
            Ok(())
        },
        _ => Err(err.into()),
    }
}
