//! The document being pushed and the payload built from it.
//!
//! Pure functions only, no I/O, no async, no filesystem access.

use std::path::{Path, PathBuf};

use lavadocs_common::CreateDocumentRequest;

use crate::domain::error::DocumentError;
use crate::domain::slug::identifier;

/// The document currently focused in the host, as read at invocation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    /// Location the document was read from.
    pub path: PathBuf,
    /// Display name: the file name without its extension.
    pub title: String,
    /// Full document body.
    pub content: String,
}

impl ActiveDocument {
    /// Build a document from its path and body, deriving the display name.
    ///
    /// Returns `None` when the path has no file name (e.g. `/` or `..`).
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>, content: String) -> Option<Self> {
        let path = path.into();
        let title = display_name(&path)?;
        Some(Self {
            path,
            title,
            content,
        })
    }
}

/// The host's display name for a file: its stem, extension removed.
#[must_use]
pub fn display_name(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
}

/// `{title, content, identifier}` for one publish attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPayload {
    pub title: String,
    pub content: String,
    pub identifier: String,
}

impl DocumentPayload {
    /// Build the payload for `doc`, refusing documents that cannot produce a
    /// useful remote page.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::EmptyDocument`] when the title is blank, the
    /// body is blank, or the derived identifier is empty.
    pub fn from_document(doc: &ActiveDocument) -> Result<Self, DocumentError> {
        let identifier = identifier(&doc.title);
        if doc.title.trim().is_empty() || doc.content.trim().is_empty() || identifier.is_empty() {
            return Err(DocumentError::EmptyDocument {
                title: doc.title.clone(),
            });
        }
        Ok(Self {
            title: doc.title.clone(),
            content: doc.content.clone(),
            identifier,
        })
    }

    /// The request envelope sent to the service.
    #[must_use]
    pub fn to_request(&self) -> CreateDocumentRequest {
        CreateDocumentRequest::new(&self.title, &self.content, &self.identifier)
    }
}
