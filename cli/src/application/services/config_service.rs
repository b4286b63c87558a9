//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{LavadocsConfig, apply_setting};

/// Load configuration, normalizing the service address.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn load_config(store: &impl ConfigStore) -> Result<LavadocsConfig> {
    Ok(store.load()?.normalized())
}

/// Save configuration.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn save_config(store: &impl ConfigStore, config: &LavadocsConfig) -> Result<()> {
    store.save(config)
}

/// Change one setting and persist immediately.
///
/// Nothing is written when the key or value is rejected.
///
/// # Errors
///
/// Returns an error if validation, loading, or saving fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<LavadocsConfig> {
    let mut config = load_config(store)?;
    apply_setting(&mut config, key, value)?;
    save_config(store, &config)?;
    tracing::debug!(key, "setting saved");
    Ok(config)
}
