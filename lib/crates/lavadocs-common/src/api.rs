//! Fixed paths of the Lavadocs HTTP API.

/// Endpoint that creates a document (`POST`).
pub const DOCUMENTS_PATH: &str = "/api/v1/documents";

/// Path of the public page for a published document.
#[must_use]
pub fn document_path(username: &str, slug: &str) -> String {
    format!("/users/{username}/documents/{slug}")
}
