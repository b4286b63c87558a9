//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;

use crate::application::services::publish::PushOutcome;
use crate::domain::config::{
    KEY_CREDENTIAL, KEY_OPEN_AFTER_PUBLISH, KEY_SERVICE_ADDRESS, LavadocsConfig,
};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the current configuration. The credential is masked.
    pub fn render_config(&self, config: &LavadocsConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!(
            "  {:<22} {}",
            format!("{KEY_CREDENTIAL}:"),
            config.masked_credential()
        );
        println!(
            "  {:<22} {}",
            format!("{KEY_SERVICE_ADDRESS}:"),
            config.service_address
        );
        println!(
            "  {:<22} {}",
            format!("{KEY_OPEN_AFTER_PUBLISH}:"),
            config.open_after_publish
        );
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["LAVADOCS_CONFIG", "LAVADOCS_VAULT", "LAVADOCS_LOG", "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    /// Render the public page of a published document. Blocked and failed
    /// pushes were already reported as notices.
    pub fn render_push(&self, outcome: &PushOutcome) {
        if self.ctx.quiet {
            return;
        }
        if let PushOutcome::Published { url, opened, .. } = outcome {
            let verb = if *opened { "Opened" } else { "View at" };
            println!("  {verb} {}", url.style(self.ctx.styles.link));
        }
    }

    /// Render a derived identifier, bare so it can be piped.
    pub fn render_slug(&self, slug: &str) {
        println!("{slug}");
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("lavadocs {version}");
    }
}
