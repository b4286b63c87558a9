//! Identifier ("slug") derivation from a document title.
//!
//! Pure functions only, no I/O, no async, no filesystem access.

#![allow(clippy::expect_used)] // Patterns are compile-time constants

use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("valid regex"));

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Derive the URL path identifier for a document title.
///
/// Lowercases the title, drops every character outside `[a-zA-Z0-9\s]`,
/// trims, and joins the remaining whitespace-separated words with `-`.
///
/// Returns an empty string when nothing survives. Callers must treat an
/// empty identifier as a reason not to publish.
#[must_use]
pub fn identifier(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    WHITESPACE_RUN
        .replace_all(stripped.trim(), "-")
        .into_owned()
}

/// Returns `true` if `s` only contains characters allowed in an identifier.
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
