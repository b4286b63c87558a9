//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: config file access, document
//! reads, the HTTP client, and the browser launcher.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod browser;
pub mod config;
pub mod document;
pub mod publisher;
