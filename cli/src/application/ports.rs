//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! Each one stands in for a capability the host environment provides.
//! This file imports only from `crate::domain` and `lavadocs_common`, never
//! from `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;
use lavadocs_common::PublishedDocRef;

use crate::domain::{ActiveDocument, DocumentPayload, LavadocsConfig, PublishError};

// ── Document Port ─────────────────────────────────────────────────────────────

/// Resolves and reads the document the user is currently working on.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    /// Read the active document.
    ///
    /// Returns `Ok(None)` when no document is active.
    ///
    /// # Errors
    ///
    /// Returns an error if a document is active but cannot be read.
    async fn active_document(&self) -> Result<Option<ActiveDocument>>;
}

// ── Publishing Port ───────────────────────────────────────────────────────────

/// Sends a document to the publishing service.
#[allow(async_fn_in_trait)]
pub trait Publisher {
    /// Issue exactly one create request for `payload`.
    ///
    /// # Errors
    ///
    /// Every failure is returned as a categorized [`PublishError`]; nothing
    /// is retried.
    async fn publish(
        &self,
        payload: &DocumentPayload,
        config: &LavadocsConfig,
    ) -> Result<PublishedDocRef, PublishError>;
}

// ── Host Environment Ports ────────────────────────────────────────────────────

/// Opens a URL outside the tool (browser, new window). Best effort.
pub trait UrlOpener {
    /// Ask the environment to open `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if no handler could be launched.
    fn open(&self, url: &str) -> Result<()>;
}

/// Shows short user-facing notices. Sync trait, no async needed.
pub trait Notifier {
    /// An in-progress step. Not a notice: may be rendered as a spinner.
    fn step(&self, message: &str);
    /// A completed action.
    fn success(&self, message: &str);
    /// Something that did not stop the action.
    fn warn(&self, message: &str);
    /// A failed or blocked action.
    fn error(&self, message: &str);
}

// ── Settings Port ─────────────────────────────────────────────────────────────

/// Abstracts settings persistence (load/save).
pub trait ConfigStore {
    /// Load the persisted settings merged over defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings exist but cannot be read or parsed.
    fn load(&self) -> Result<LavadocsConfig>;

    /// Overwrite the persisted settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    fn save(&self, config: &LavadocsConfig) -> Result<()>;

    /// Location of the persisted settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
