// crates/contacts-cli/src/commands/mod.rs - Command Handler Modules
//
// One module per subcommand. Handlers share two conventions, implemented by
// the helpers below:
// - a missing contact file is reported, not raised, for read-only operations
// - a cancelled prompt (end of input, too many bad answers) ends the
//   operation with a message and leaves the file untouched
//
// Only genuine I/O, CSV and configuration failures propagate to `main`.

pub mod add;
pub mod init;
pub mod read;
pub mod redact;
pub mod search;

use anyhow::Result;
use std::io::{BufRead, Write};

use contacts_core::{ContactTable, StoreError};

use crate::context::Context;
use crate::prompt::{PromptError, Prompter};

/// Load the table, or print a notice and return `None` if the file is absent
fn load_existing<R: BufRead, W: Write>(
    ctx: &Context,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<ContactTable>> {
    match ctx.store.load() {
        Ok(table) => Ok(Some(table)),
        Err(StoreError::FileMissing(path)) => {
            prompter.say(format!(
                "No contacts yet: {} does not exist. Run `contacts add` to create it.",
                path.display()
            ))?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Turn a prompt failure into a printed cancellation, keeping real I/O errors
fn report_cancelled<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    err: PromptError,
) -> Result<()> {
    match err {
        PromptError::Io(e) => Err(e.into()),
        other => {
            tracing::info!(reason = %other, "operation cancelled");
            prompter.say("")?;
            prompter.say(format!("❌ Cancelled: {other}"))?;
            Ok(())
        }
    }
}
