//! Interactive acronym menu
//!
//! One choice per run: look up, add or remove, then exit.

use std::io::{BufRead, Write};

use acro::prompt::Prompter;

use super::{Context, acronym};

const CHOICE_PROMPT: &str = "Would you like to look up an acronym, add an acronym, or remove an \
                             acronym? 1 = look up, 2 = add, 3 = remove";

/// Ask for one choice and run it against the glossary
pub fn acronym_menu<R: BufRead, W: Write>(
    ctx: &Context,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let Some(choice) = prompter.ask(CHOICE_PROMPT)? else {
        return Ok(());
    };

    match choice.trim() {
        "1" => {
            let query = prompter.ask_required("What software acronym would you like to look up?")?;
            acronym::lookup(ctx, &query, ctx.match_mode, prompter.output_mut())
        },
        "2" => {
            let name = prompter.ask_required("What acronym would you like to add?")?;
            let definition = prompter.ask_required("What is the definition of the acronym?")?;
            acronym::add(ctx, &name, &definition, prompter.output_mut())
        },
        "3" => {
            let name = prompter.ask_required("What acronym would you like to remove?")?;
            acronym::remove(ctx, &name, prompter.output_mut())
        },
        other => {
            log::debug!("invalid menu choice {other:?}");
            prompter.say("Invalid choice. Please enter 1, 2, or 3.")?;
            Ok(())
        },
    }
}
