//! Application service: push the active document to Lavadocs.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! Each call runs `Idle → Reading → {Blocked | Publishing} → {Published |
//! Failed}` and carries no state into the next call. Concurrent calls are
//! independent: nothing deduplicates them.

use lavadocs_common::PublishedDocRef;

use crate::application::ports::{DocumentSource, Notifier, Publisher, UrlOpener};
use crate::domain::{DocumentError, DocumentPayload, LavadocsConfig, PublishError};

/// Notice shown after the service accepted the document.
pub const PUBLISHED_NOTICE: &str = "Pushed to Lavadocs!";

/// How a push ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// Stopped before any network call.
    Blocked(DocumentError),
    /// The service accepted the document.
    Published {
        /// Reference returned by the service.
        doc: PublishedDocRef,
        /// Public page of the document.
        url: String,
        /// Whether the page was handed to the URL opener successfully.
        opened: bool,
    },
    /// The request was attempted and failed.
    Failed(PublishError),
}

impl PushOutcome {
    /// Returns `true` for [`PushOutcome::Published`].
    #[must_use]
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published { .. })
    }
}

/// Read the active document and publish it.
///
/// Every outcome other than success produces exactly one error notice.
/// Failures after the document was read are also logged at debug level. The
/// published page is opened when `config.open_after_publish` is set; a failed
/// open is only a warning.
pub async fn push_active_document(
    source: &impl DocumentSource,
    publisher: &impl Publisher,
    opener: &impl UrlOpener,
    notifier: &impl Notifier,
    config: &LavadocsConfig,
) -> PushOutcome {
    tracing::debug!("reading active document");
    let doc = match source.active_document().await {
        Ok(Some(doc)) => doc,
        Ok(None) => return blocked(notifier, DocumentError::NoActiveDocument),
        Err(e) => {
            return failed(
                notifier,
                PublishError::Remote(format!("cannot read document: {e:#}")),
            );
        }
    };

    let payload = match DocumentPayload::from_document(&doc) {
        Ok(payload) => payload,
        Err(e) => return blocked(notifier, e),
    };

    tracing::debug!(
        title = %payload.title,
        slug = %payload.identifier,
        endpoint = %config.documents_endpoint(),
        "publishing document"
    );
    notifier.step(&format!("Pushing '{}'", payload.title));

    let published = match publisher.publish(&payload, config).await {
        Ok(doc) => doc,
        Err(e) => return failed(notifier, e),
    };

    notifier.success(PUBLISHED_NOTICE);
    let url = config.document_url(&published);
    tracing::info!(url = %url, "document published");

    let opened = config.open_after_publish && open_page(opener, notifier, &url);

    PushOutcome::Published {
        doc: published,
        url,
        opened,
    }
}

fn blocked(notifier: &impl Notifier, reason: DocumentError) -> PushOutcome {
    notifier.error(&reason.to_string());
    PushOutcome::Blocked(reason)
}

fn failed(notifier: &impl Notifier, err: PublishError) -> PushOutcome {
    tracing::debug!(code = err.code(), error = %err, "push failed");
    notifier.error(&err.to_string());
    PushOutcome::Failed(err)
}

fn open_page(opener: &impl UrlOpener, notifier: &impl Notifier, url: &str) -> bool {
    match opener.open(url) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "could not open published page");
            notifier.warn(&format!("Could not open {url}: {e}"));
            false
        }
    }
}
