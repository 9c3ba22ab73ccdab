//! Acronym commands - lookup, add, remove, list

use std::io::Write;

use acro::Error;
use acro::acronym::{MatchMode, normalize};
use acro::output::{EntryListResult, LookupResult, OperationResult, Render};
use anyhow::Context as _;

use super::{Context, report_soft};

fn describe(err: &Error) -> Option<String> {
    match err {
        Error::FileNotFound(_) => Some("Acronyms file not found.".to_string()),
        Error::NotFound(_) => Some("Acronym not found.".to_string()),
        _ => None,
    }
}

/// Print every line matching `query`
pub fn lookup(
    ctx: &Context,
    query: &str,
    match_mode: MatchMode,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match ctx.store.lookup_with(query, match_mode) {
        Ok(matches) => {
            let result = LookupResult {
                query: normalize(query),
                matches,
            };
            result.render_to(ctx.output_mode, out)?;
            Ok(())
        },
        Err(e) => report_soft(e, describe, ctx.output_mode, out)
            .with_context(|| format!("looking up {query:?} in {}", ctx.store.path().display())),
    }
}

/// Append an entry to the glossary
pub fn add(ctx: &Context, acronym: &str, definition: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    let entry = ctx
        .store
        .add(acronym, definition)
        .with_context(|| format!("adding to {}", ctx.store.path().display()))?;
    OperationResult::ok(format!("Added {entry}")).render_to(ctx.output_mode, out)?;
    Ok(())
}

/// Drop every line starting with `acronym`
pub fn remove(ctx: &Context, acronym: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    match ctx.store.remove(acronym) {
        Ok(1) => {
            OperationResult::ok("Acronym removed.").render_to(ctx.output_mode, out)?;
            Ok(())
        },
        Ok(n) => {
            OperationResult::ok(format!("Acronym removed ({n} entries).")).render_to(ctx.output_mode, out)?;
            Ok(())
        },
        Err(e) => report_soft(e, describe, ctx.output_mode, out)
            .with_context(|| format!("removing {acronym:?} from {}", ctx.store.path().display())),
    }
}

/// Print every well-formed entry
pub fn list(ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
    match ctx.store.entries() {
        Ok(entries) => {
            EntryListResult { entries }.render_to(ctx.output_mode, out)?;
            Ok(())
        },
        Err(e) => report_soft(e, describe, ctx.output_mode, out)
            .with_context(|| format!("listing {}", ctx.store.path().display())),
    }
}
