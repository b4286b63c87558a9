//! Shared port doubles for unit tests.
//!
//! Hand-written fakes for the async ports and a `mockall` mock for the
//! synchronous URL opener, so each test file doesn't re-define the same
//! boilerplate.

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use lavadocs_cli::application::ports::{ConfigStore, DocumentSource, Notifier, Publisher, UrlOpener};
use lavadocs_cli::domain::{ActiveDocument, DocumentPayload, LavadocsConfig, PublishError};
use lavadocs_common::PublishedDocRef;
use mockall::mock;

// ── Documents ─────────────────────────────────────────────────────────────────

pub fn doc(title: &str, content: &str) -> ActiveDocument {
    ActiveDocument {
        path: PathBuf::from(format!("vault/{title}.md")),
        title: title.to_string(),
        content: content.to_string(),
    }
}

/// Returns the same document (or none) on every read.
pub struct StaticSource(pub Option<ActiveDocument>);

impl DocumentSource for StaticSource {
    async fn active_document(&self) -> Result<Option<ActiveDocument>> {
        Ok(self.0.clone())
    }
}

/// A document is active but cannot be read.
pub struct UnreadableSource;

impl DocumentSource for UnreadableSource {
    async fn active_document(&self) -> Result<Option<ActiveDocument>> {
        anyhow::bail!("permission denied")
    }
}

// ── Publisher ─────────────────────────────────────────────────────────────────

/// Records every payload and answers with a canned result.
///
/// Yields once while "in flight" so concurrent pushes interleave.
pub struct RecordingPublisher {
    response: Result<PublishedDocRef, PublishError>,
    pub payloads: Mutex<Vec<DocumentPayload>>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl RecordingPublisher {
    pub fn ok(username: &str, slug: &str) -> Self {
        Self::with(Ok(PublishedDocRef {
            username: username.to_string(),
            slug: slug.to_string(),
        }))
    }

    pub fn err(e: PublishError) -> Self {
        Self::with(Err(e))
    }

    fn with(response: Result<PublishedDocRef, PublishError>) -> Self {
        Self {
            response,
            payloads: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().expect("lock").len()
    }
}

impl Publisher for RecordingPublisher {
    async fn publish(
        &self,
        payload: &DocumentPayload,
        _config: &LavadocsConfig,
    ) -> Result<PublishedDocRef, PublishError> {
        self.payloads.lock().expect("lock").push(payload.clone());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.response.clone()
    }
}

// ── Opener ────────────────────────────────────────────────────────────────────

mock! {
    pub Opener {}

    impl UrlOpener for Opener {
        fn open(&self, url: &str) -> Result<()>;
    }
}

/// An opener that must never be called.
pub fn opener_never() -> MockOpener {
    let mut opener = MockOpener::new();
    opener.expect_open().times(0);
    opener
}

// ── Notifier ──────────────────────────────────────────────────────────────────

/// Collects every notice by level.
#[derive(Default)]
pub struct RecordingNotifier {
    pub steps: RefCell<Vec<String>>,
    pub successes: RefCell<Vec<String>>,
    pub warnings: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    /// Notices shown to the user (steps excluded).
    pub fn notice_count(&self) -> usize {
        self.successes.borrow().len() + self.warnings.borrow().len() + self.errors.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn step(&self, message: &str) {
        self.steps.borrow_mut().push(message.to_string());
    }
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }
    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

// ── Config store ──────────────────────────────────────────────────────────────

/// In-memory settings persistence counting saves.
#[derive(Default)]
pub struct MemoryConfigStore {
    pub stored: RefCell<Option<LavadocsConfig>>,
    pub saves: RefCell<usize>,
}

impl MemoryConfigStore {
    pub fn with(config: LavadocsConfig) -> Self {
        Self {
            stored: RefCell::new(Some(config)),
            saves: RefCell::new(0),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<LavadocsConfig> {
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    fn save(&self, config: &LavadocsConfig) -> Result<()> {
        *self.stored.borrow_mut() = Some(config.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("memory://config.yaml"))
    }
}
