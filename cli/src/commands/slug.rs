//! `lavadocs slug`: preview the identifier derived from a title.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::domain::identifier;

/// Arguments for the slug command.
#[derive(Args)]
pub struct SlugArgs {
    /// Note title, as it appears in the file name
    pub title: String,
}

/// Run the slug command. An empty identifier exits non-zero: such a note
/// cannot be pushed.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn run(app: &AppContext, args: &SlugArgs) -> Result<ExitCode> {
    let slug = identifier(&args.title);
    app.renderer().render_slug(&args.title, &slug)?;
    if slug.is_empty() {
        app.output
            .error(&format!("'{}' has no characters usable in a URL", args.title));
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
