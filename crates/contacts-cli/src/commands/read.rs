// crates/contacts-cli/src/commands/read.rs - Paginated Listing Command
//
// Shows the table a page at a time and waits for a navigation directive after
// each page. See `contacts_core::pager` for the directive grammar.

use anyhow::Result;
use std::io::{BufRead, Write};

use contacts_core::{PageDirective, Pager};

use crate::commands::load_existing;
use crate::context::Context;
use crate::prompt::{PromptError, Prompter};
use crate::services::TableRenderer;

const PAGE_PROMPT: &str = "Press 'Enter' for the next page, 'p' to display previous list, \
                           number if you want start from particular row \
                           or whatever another key to exit: ";

/// Page through every contact
///
/// `page_size` overrides the configured window size when given.
pub fn handle<R: BufRead, W: Write>(
    ctx: &Context,
    prompter: &mut Prompter<R, W>,
    page_size: Option<usize>,
) -> Result<()> {
    let Some(table) = load_existing(ctx, prompter)? else {
        return Ok(());
    };

    if table.is_empty() {
        prompter.say("No contacts to display.")?;
        return Ok(());
    }

    let renderer = TableRenderer::for_terminal();
    let mut pager = Pager::new(
        table.len(),
        page_size.unwrap_or(ctx.config().display.page_size),
    );

    while let Some(window) = pager.window() {
        prompter.say(renderer.render(&table.rows()[window]))?;

        let input = match prompter.ask(PAGE_PROMPT) {
            Ok(input) => input,
            Err(PromptError::InputClosed) => break,
            Err(e) => return Err(e.into()),
        };

        let directive = PageDirective::parse(&input, table.len());
        if let PageDirective::OutOfRange(row) = &directive {
            prompter.say(format!(
                "Row {} is out of range (1-{}).",
                row,
                table.len()
            ))?;
        }

        if !pager.apply(directive) {
            break;
        }
    }

    Ok(())
}
