// crates/contacts-cli/src/services/mod.rs - Service layer modules
pub mod form;
pub mod table;

pub use form::ContactForm;
pub use table::TableRenderer;
