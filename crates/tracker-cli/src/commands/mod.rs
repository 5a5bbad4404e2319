// crates/tracker-cli/src/commands/mod.rs - Interactive tracker sessions
//
// One module per tracker. Each exposes `run`, which owns the session's
// collection, loops over its menus until the user exits (or input ends) and
// prints the exit message.

pub mod projects;
pub mod tasks;

use std::io::{BufRead, Write};
use tracker_core::render::DIVIDER;

use crate::messages;
use crate::stdin::{Console, InputError, InputResult};

/// Print a menu block followed by the shared footer line
fn show_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
    entries: &[&str],
) -> InputResult<()> {
    console.say(title)?;
    for entry in entries {
        console.say(entry)?;
    }
    console.say(DIVIDER)
}

/// Turn a typed number into a 1-based position; negatives become 0, which no
/// collection accepts
fn to_position(selection: i64) -> usize {
    usize::try_from(selection).unwrap_or(0)
}

/// Close a session: end of input counts as choosing "exit"
fn finish<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: InputResult<()>,
) -> anyhow::Result<()> {
    match outcome {
        Ok(()) => {}
        Err(InputError::Eof) => {
            tracing::debug!("input closed, leaving session");
            console.say("")?;
        }
        Err(err) => return Err(err.into()),
    }
    console.say(messages::EXITING)?;
    Ok(())
}
