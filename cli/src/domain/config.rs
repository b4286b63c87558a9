//! Domain types and validators for Lavadocs configuration.
//!
//! Pure functions only, no I/O, no async, no filesystem access.

use anyhow::Result;
use lavadocs_common::{DOCUMENTS_PATH, PublishedDocRef, document_path};
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_SERVICE_ADDRESS: &str = "https://lavadocs.com";

pub const KEY_CREDENTIAL: &str = "credential";
pub const KEY_SERVICE_ADDRESS: &str = "service_address";
pub const KEY_OPEN_AFTER_PUBLISH: &str = "open_after_publish";

pub const VALID_CONFIG_KEYS: &[&str] = &[KEY_CREDENTIAL, KEY_SERVICE_ADDRESS, KEY_OPEN_AFTER_PUBLISH];
pub const VALID_BOOLEANS: &[&str] = &["true", "false"];

// ── Config schema ────────────────────────────────────────────────────────────

/// Settings stored in `~/.lavadocs/config.yaml`.
///
/// Fields missing from the file take their default, so files written by
/// older versions keep loading. Older field names are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LavadocsConfig {
    /// Secret sent verbatim in the `Authorization` header. Empty means
    /// unconfigured.
    #[serde(alias = "lava_key", alias = "lavaKey")]
    pub credential: String,

    /// Base URL of the publishing service, e.g. `https://lavadocs.com`.
    #[serde(alias = "domain")]
    pub service_address: String,

    /// Open the published page in the browser after a successful push.
    #[serde(alias = "open_new_window", alias = "openNewWindow")]
    pub open_after_publish: bool,
}

impl Default for LavadocsConfig {
    fn default() -> Self {
        Self {
            credential: String::new(),
            service_address: DEFAULT_SERVICE_ADDRESS.to_string(),
            open_after_publish: true,
        }
    }
}

impl LavadocsConfig {
    /// Returns the config with its service address normalized.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.service_address = normalize_service_address(&self.service_address);
        self
    }

    /// `<service_address>/api/v1/documents`
    #[must_use]
    pub fn documents_endpoint(&self) -> String {
        format!("{}{DOCUMENTS_PATH}", self.base())
    }

    /// `<service_address>/users/<username>/documents/<slug>`
    #[must_use]
    pub fn document_url(&self, doc: &PublishedDocRef) -> String {
        format!("{}{}", self.base(), document_path(&doc.username, &doc.slug))
    }

    /// Credential for display: never more than the first four characters.
    #[must_use]
    pub fn masked_credential(&self) -> String {
        if self.credential.is_empty() {
            return "(not set)".to_string();
        }
        let prefix: String = self.credential.chars().take(4).collect();
        format!("{prefix}…")
    }

    fn base(&self) -> &str {
        self.service_address.trim_end_matches('/')
    }
}

/// Turn a user-entered service address into a base URL.
///
/// A bare domain gets `https://`; trailing slashes are removed; a value with
/// no host falls back to [`DEFAULT_SERVICE_ADDRESS`]. Idempotent.
#[must_use]
pub fn normalize_service_address(raw: &str) -> String {
    let trimmed = raw.trim();
    let (scheme, rest) = trimmed.split_once("://").unwrap_or(("https", trimmed));
    let rest = rest.trim_end_matches('/');
    if rest.is_empty() {
        return DEFAULT_SERVICE_ADDRESS.to_string();
    }
    format!("{scheme}://{rest}")
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// The service address is not checked here; a bad address
/// surfaces as a transport error on the next push.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    if key == KEY_OPEN_AFTER_PUBLISH && !VALID_BOOLEANS.contains(&value) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            valid: VALID_BOOLEANS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validate and apply a single `key = value` edit.
///
/// # Errors
///
/// Returns an error if the key or value is invalid.
pub fn apply_setting(config: &mut LavadocsConfig, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;
    match key {
        KEY_CREDENTIAL => config.credential = value.to_string(),
        KEY_SERVICE_ADDRESS => config.service_address = normalize_service_address(value),
        KEY_OPEN_AFTER_PUBLISH => config.open_after_publish = value == "true",
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
