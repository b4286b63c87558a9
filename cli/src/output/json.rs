//! JSON output helpers for `--json` mode.

use std::path::Path;

use anyhow::{Context, Result};
use lavadocs_common::PublishedDocRef;

use crate::application::services::publish::PushOutcome;
use crate::domain::LavadocsConfig;

/// Renders results as JSON objects on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Published → result object; blocked or failed → error object.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_push(&self, outcome: &PushOutcome) -> Result<()> {
        let out = match outcome {
            PushOutcome::Published { doc, url, opened } => format_published(doc, url, *opened)?,
            PushOutcome::Blocked(e) => format_error(&e.to_string(), e.code())?,
            PushOutcome::Failed(e) => format_error(&e.to_string(), e.code())?,
        };
        println!("{out}");
        Ok(())
    }

    /// Current configuration with the credential masked.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &LavadocsConfig, path: &Path) -> Result<()> {
        let obj = serde_json::json!({
            "path": path.display().to_string(),
            "credential": config.masked_credential(),
            "service_address": config.service_address,
            "open_after_publish": config.open_after_publish,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&obj).context("JSON serialization failed")?
        );
        Ok(())
    }

    /// `{"title": ..., "slug": ...}`
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_slug(&self, title: &str, slug: &str) -> Result<()> {
        let obj = serde_json::json!({ "title": title, "slug": slug });
        println!(
            "{}",
            serde_json::to_string(&obj).context("JSON serialization failed")?
        );
        Ok(())
    }

    /// `{"version": ...}`
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        let obj = serde_json::json!({ "version": version });
        println!(
            "{}",
            serde_json::to_string(&obj).context("JSON serialization failed")?
        );
        Ok(())
    }
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format the result of a successful push.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_published(doc: &PublishedDocRef, url: &str, opened: bool) -> Result<String> {
    let obj = serde_json::json!({
        "published": true,
        "username": doc.username,
        "slug": doc.slug,
        "url": url,
        "opened": opened,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
