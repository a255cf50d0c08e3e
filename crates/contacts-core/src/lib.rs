//! # contacts-core
//!
//! Core library for a flat-file contact book.
//!
//! - [`contact`]: the record type, its field catalogue and the phone rule
//! - [`store`]: the CSV-backed table (create, load, append, rewrite)
//! - [`query`]: exact-match attribute filters for search
//! - [`pager`]: fixed-size paging over table rows
//! - [`config`]: layered configuration
//!
//! Nothing here talks to a terminal; interactive input lives in the CLI crate.

pub mod config;
pub mod contact;
pub mod pager;
pub mod query;
pub mod store;

pub use config::{ConfigError, ConfigManager, ContactsConfig};
pub use contact::{Contact, ContactError, Field, NameKey, NO_PHONE};
pub use pager::{PageDirective, Pager};
pub use query::{QueryError, SearchQuery, MAX_FILTERS};
pub use store::{ContactStore, ContactTable, StoreError};
