use anyhow::{Context as AnyhowContext, Result};
use contacts_core::{ConfigManager, ContactStore, ContactsConfig};
use std::env;
use std::path::{Path, PathBuf};

/// Application context that gets passed to command handlers
///
/// Holds the resolved configuration and the store built from it. The contact
/// file path is decided once here and injected into the store; handlers never
/// look it up themselves.
pub struct Context {
    pub store: ContactStore,
    config: ContactsConfig,
}

impl Context {
    /// Resolve configuration and build the store
    ///
    /// Path precedence: `--file` / CONTACTS_FILE > config file > default.
    pub fn new(file: Option<PathBuf>, config_path: Option<&Path>) -> Result<Self> {
        let working_dir = env::current_dir().context("Failed to determine working directory")?;
        let mut config = ConfigManager::load_config(config_path, &working_dir)
            .context("Failed to load configuration")?;

        if let Some(file) = file {
            config.store.path = file;
        }

        Ok(Self::from_config(config))
    }

    pub fn from_config(config: ContactsConfig) -> Self {
        let store = ContactStore::new(config.store.path.clone());
        Self { store, config }
    }

    pub fn config(&self) -> &ContactsConfig {
        &self.config
    }
}
