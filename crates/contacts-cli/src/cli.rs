use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "contacts")]
#[command(about = "An interactive contact book stored in a CSV file")]
#[command(version)]
pub struct Cli {
    /// Contact file (overrides the configured store path)
    #[arg(short, long, global = true, env = "CONTACTS_FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file (defaults to ./contacts.toml when present)
    #[arg(short, long, global = true, env = "CONTACTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Contact book operations
#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty contact file
    Init,

    /// Add a contact, prompting for each field
    Add,

    /// Page through all contacts
    Read {
        /// Rows per page (overrides display.page_size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Find contacts matching up to three attributes
    Search,

    /// Replace the fields of one contact, chosen by full name
    Redact,
}
