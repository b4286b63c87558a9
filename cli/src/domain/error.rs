//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error`; their `Display` text is the
//! notice shown to the user.

use thiserror::Error;

// ── Document errors ───────────────────────────────────────────────────────────

/// Conditions that block a push before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("No active file. Pass a note path or point --vault at an Obsidian vault.")]
    NoActiveDocument,

    #[error("Nothing to push: '{title}' is empty or has no usable title.")]
    EmptyDocument { title: String },
}

impl DocumentError {
    /// Stable machine-readable code used by `--json` output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoActiveDocument => "NO_ACTIVE_DOCUMENT",
            Self::EmptyDocument { .. } => "EMPTY_DOCUMENT",
        }
    }
}

// ── Publish errors ────────────────────────────────────────────────────────────

/// Failures of the publish request. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    #[error(
        "Unauthorized, the gates are closed! Check your Lava Key: lavadocs config set credential"
    )]
    Unauthorized,

    #[error(
        "Lavadocs not found at {address}. Check the hosted URL: lavadocs config set service_address <url>"
    )]
    ServiceNotFound { address: String },

    #[error(
        "Cannot connect securely to {address}: {detail}\n\nCheck the URL scheme (http/https) and the server's SSL setup."
    )]
    TransportOrTls { address: String, detail: String },

    #[error("Error pushing to Lavadocs: {0}")]
    Remote(String),
}

impl PublishError {
    /// Stable machine-readable code used by `--json` output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::ServiceNotFound { .. } => "SERVICE_NOT_FOUND",
            Self::TransportOrTls { .. } => "TRANSPORT_OR_TLS",
            Self::Remote(_) => "REMOTE_ERROR",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },

    #[error("Missing value for {key}")]
    MissingValue { key: String },
}
