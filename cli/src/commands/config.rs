//! `lavadocs config`: show and set configuration values.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service;
use crate::domain::config::{KEY_CREDENTIAL, KEY_SERVICE_ADDRESS, validate_config_key};
use crate::domain::error::ConfigError;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key: credential, service_address, open_after_publish
        key: String,
        /// Configuration value. Prompted for (hidden) when setting the credential
        value: Option<String>,
    },
    /// Print the configuration file location
    Path,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the key or value is invalid or the store fails.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => show_config(app),
        ConfigCommand::Set { key, value } => set_config(app, &key, value),
        ConfigCommand::Path => {
            println!("{}", app.config_store.path()?.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn show_config(app: &AppContext) -> Result<ExitCode> {
    let config = config_service::load_config(&app.config_store)?;
    let path = app.config_store.path()?;
    app.renderer().render_config(&config, &path)?;
    Ok(ExitCode::SUCCESS)
}

fn set_config(app: &AppContext, key: &str, value: Option<String>) -> Result<ExitCode> {
    validate_config_key(key)?;
    let value = match value {
        Some(v) => v,
        None if key == KEY_CREDENTIAL => app.prompt_secret("Lava Key")?,
        None => {
            return Err(ConfigError::MissingValue {
                key: key.to_string(),
            }
            .into());
        }
    };

    let config = config_service::set_value(&app.config_store, key, &value)?;

    let shown = match key {
        KEY_CREDENTIAL => config.masked_credential(),
        KEY_SERVICE_ADDRESS => config.service_address,
        _ => value,
    };
    app.output.success(&format!("Set {key} = {shown}"));
    Ok(ExitCode::SUCCESS)
}
