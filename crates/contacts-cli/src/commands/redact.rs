// crates/contacts-cli/src/commands/redact.rs - Redact (Update) Contact Command
//
// Picks one contact by full name and replaces all of its fields. Unlike `add`,
// a successful redact rewrites the whole file; rows other than the target are
// serialized exactly as they were.
//
// TARGET RESOLUTION:
// - no row with that name:   report and stop, file untouched
// - exactly one row:         that row
// - several rows:            show them, ask for the target's number; a number
//                            not among them stops the operation

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use contacts_core::{ContactTable, NameKey, StoreError};

use crate::commands::{load_existing, report_cancelled};
use crate::context::Context;
use crate::prompt::{PromptResult, Prompter};
use crate::services::{ContactForm, TableRenderer};

/// Replace one contact's fields, chosen by last, first and middle name
pub fn handle<R: BufRead, W: Write>(ctx: &Context, prompter: &mut Prompter<R, W>) -> Result<()> {
    let Some(mut table) = load_existing(ctx, prompter)? else {
        return Ok(());
    };

    let key = match ask_name(prompter) {
        Ok(key) => key,
        Err(err) => return report_cancelled(prompter, err),
    };

    let position = match resolve_target(&table, &key, prompter) {
        Ok(Some(position)) => position,
        Ok(None) => return Ok(()),
        Err(err) => return report_cancelled(prompter, err),
    };

    let number = target_number(&table, position)?;

    let contact = match ContactForm::collect(prompter, number) {
        Ok(contact) => contact,
        Err(err) => return report_cancelled(prompter, err),
    };

    table.replace(position, contact)?;
    ctx.store.save(&table)?;
    info!(number, "contact redacted");
    prompter.say("Row redacted successfully.")?;

    Ok(())
}

fn ask_name<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> PromptResult<NameKey> {
    let last_name = prompter.ask("Enter the last name: ")?;
    let first_name = prompter.ask("Enter the first name: ")?;
    let middle_name = prompter.ask("Enter the middle name: ")?;
    Ok(NameKey::new(last_name, first_name, middle_name))
}

/// Number of the row at `position`, which is kept across the redact
fn target_number(table: &ContactTable, position: usize) -> Result<u32, StoreError> {
    table
        .get(position)
        .map(|contact| contact.number)
        .ok_or(StoreError::RowOutOfRange {
            position,
            len: table.len(),
        })
}

/// Find the row to redact, or `None` after telling the user why not
fn resolve_target<R: BufRead, W: Write>(
    table: &ContactTable,
    key: &NameKey,
    prompter: &mut Prompter<R, W>,
) -> PromptResult<Option<usize>> {
    let positions = table.positions_by_name(key);

    match positions.as_slice() {
        [] => {
            prompter.say(
                "No row found with the specified first name, last name, and middle name.",
            )?;
            Ok(None)
        }
        [only] => Ok(Some(*only)),
        _ => {
            prompter.say("Multiple rows found:")?;
            let candidates = positions.iter().filter_map(|&position| table.get(position));
            prompter.say(TableRenderer::for_terminal().render(candidates))?;

            let answer = prompter.ask("Enter the number of the row you want to redact: ")?;
            let chosen = answer
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|number| table.position_of_number(&positions, number));

            if chosen.is_none() {
                prompter.say("This number not in queryset")?;
            }
            Ok(chosen)
        }
    }
}
