//! Implements `UrlOpener` with the platform's default browser.

use anyhow::{Context, Result};

use crate::application::ports::UrlOpener;

/// Opens URLs via `open::that` (xdg-open, `open`, `start`).
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        open::that_detached(url).with_context(|| format!("launching browser for {url}"))
    }
}
