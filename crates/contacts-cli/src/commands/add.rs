// crates/contacts-cli/src/commands/add.rs - Add Contact Command
//
// Appends exactly one row. Existing rows are never rewritten, so a failed or
// cancelled add can at worst leave a freshly created, header-only file.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use contacts_core::StoreError;

use crate::commands::report_cancelled;
use crate::context::Context;
use crate::prompt::Prompter;
use crate::services::ContactForm;

/// Prompt for a new contact and append it to the table
///
/// NUMBERING:
/// - missing file: create it with the header, number from 1
/// - existing file: largest number in the table + 1 (1 if there are no rows)
pub fn handle<R: BufRead, W: Write>(ctx: &Context, prompter: &mut Prompter<R, W>) -> Result<()> {
    let number = match ctx.store.load() {
        Ok(table) => table.next_number(),
        Err(StoreError::FileMissing(path)) => {
            info!(path = %path.display(), "contact file missing, creating it");
            ctx.store.create()?;
            1
        }
        Err(e) => return Err(e.into()),
    };

    let contact = match ContactForm::collect(prompter, number) {
        Ok(contact) => contact,
        Err(err) => return report_cancelled(prompter, err),
    };

    ctx.store.append(&contact)?;
    prompter.say(format!("✅ Added contact #{}", contact.number))?;

    Ok(())
}
