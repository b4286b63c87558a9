//! `lavadocs push`: publish the active note.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::config_service;
use crate::application::services::publish::push_active_document;
use crate::infra::browser::SystemBrowser;
use crate::infra::document::FsDocumentSource;
use crate::infra::publisher::UreqPublisher;
use crate::output::TerminalNotifier;

/// Arguments for the push command.
#[derive(Args)]
pub struct PushArgs {
    /// Note to push. Defaults to the focused note of --vault
    pub path: Option<PathBuf>,

    /// Obsidian vault whose focused note is pushed
    #[arg(long, env = "LAVADOCS_VAULT")]
    pub vault: Option<PathBuf>,

    /// Do not open the published page, whatever open_after_publish says
    #[arg(long)]
    pub no_open: bool,
}

/// Run the push command.
///
/// Blocked and failed pushes are reported as notices and signalled through a
/// failing exit code, not through `Err`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub async fn run(app: &AppContext, args: PushArgs) -> Result<ExitCode> {
    let mut config = config_service::load_config(&app.config_store)?;
    if args.no_open {
        config.open_after_publish = false;
    }

    let source = FsDocumentSource::new(args.path, args.vault);
    let outcome = {
        let notifier = TerminalNotifier::new(&app.output);
        push_active_document(
            &source,
            &UreqPublisher::new(),
            &SystemBrowser,
            &notifier,
            &config,
        )
        .await
    };

    app.renderer().render_push(&outcome)?;
    Ok(if outcome.is_published() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
