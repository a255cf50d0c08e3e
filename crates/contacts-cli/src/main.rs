// crates/contacts-cli/src/main.rs - CLI Application Entry Point
//
// One subcommand per invocation, each mapping to one contact-book operation.
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │     Services        │
//                        │ (store + config) │    │ (form, table)       │
//                        └──────────────────┘    └─────────────────────┘
//
// Handlers never touch stdin/stdout directly. They talk to a `Prompter`, which
// main wires to the terminal and tests wire to in-memory buffers.
//
// EXAMPLE USAGE:
// ```bash
// contacts init                        # Create an empty contacts.csv
// contacts add                         # Prompt for one new contact
// contacts read --page-size 10         # Page through the table
// contacts --file work.csv search      # Filter another contact file
// ```

use anyhow::Result;
use clap::Parser;
use std::io;

mod cli;
mod commands;
mod context;
mod logging;
mod prompt;
mod services;

use cli::{Cli, Commands};
use context::Context;
use prompt::Prompter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let ctx = Context::new(cli.file, cli.config.as_deref())?;
    tracing::debug!(path = %ctx.store.path().display(), "using contact file");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout(), ctx.config().input.max_attempts);

    match cli.command {
        Commands::Init => commands::init::handle(&ctx, &mut prompter),
        Commands::Add => commands::add::handle(&ctx, &mut prompter),
        Commands::Read { page_size } => commands::read::handle(&ctx, &mut prompter, page_size),
        Commands::Search => commands::search::handle(&ctx, &mut prompter),
        Commands::Redact => commands::redact::handle(&ctx, &mut prompter),
    }
}
