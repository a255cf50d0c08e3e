// crates/contacts-cli/src/commands/search.rs - Attribute Search Command
//
// Collects one to three attribute/value filters interactively, then prints
// the rows matching all of them.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use contacts_core::{Field, SearchQuery};

use crate::commands::{load_existing, report_cancelled};
use crate::context::Context;
use crate::prompt::{PromptResult, Prompter};
use crate::services::TableRenderer;

const ATTRIBUTE_PROMPT: &str = "Choose from one to three attributes for filtration. \
                                To exit press 'q', to start filtration press Enter: ";
const VALUE_PROMPT: &str = "Enter a value for this attribute: ";

/// Search contacts by exact attribute values
pub fn handle<R: BufRead, W: Write>(ctx: &Context, prompter: &mut Prompter<R, W>) -> Result<()> {
    let query = match collect_query(prompter) {
        Ok(Some(query)) => query,
        Ok(None) => return Ok(()),
        Err(err) => return report_cancelled(prompter, err),
    };

    let Some(table) = load_existing(ctx, prompter)? else {
        return Ok(());
    };

    let matches = query.apply(&table);
    debug!(filters = query.len(), matches = matches.len(), "search finished");

    if matches.is_empty() {
        prompter.say("No row found with your attributes")?;
    } else {
        prompter.say(TableRenderer::for_terminal().render(matches))?;
    }

    Ok(())
}

/// Gather filters until the user starts the search, quits, or fills all slots
///
/// Returns `Ok(None)` when the user quits with `q`.
fn collect_query<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> PromptResult<Option<SearchQuery>> {
    let mut query = SearchQuery::new();

    while !query.is_full() {
        let attribute = prompter.ask(ATTRIBUTE_PROMPT)?;

        match attribute.as_str() {
            "q" => return Ok(None),
            "" if query.is_empty() => prompter.say("Choose at least 1 argument")?,
            "" => break,
            name => match name.parse::<Field>() {
                Ok(field) => {
                    let value = prompter.ask(VALUE_PROMPT)?;
                    if let Err(err) = query.insert(field, value) {
                        prompter.say(err)?;
                    }
                }
                Err(_) => prompter.say("This attribute doesn't exist")?,
            },
        }
    }

    Ok(Some(query))
}
