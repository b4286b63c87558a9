//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod document;
pub mod error;
pub mod slug;

pub use config::{
    LavadocsConfig, apply_setting, normalize_service_address, validate_config_key,
    validate_config_value,
};
pub use document::{ActiveDocument, DocumentPayload};
pub use error::{ConfigError, DocumentError, PublishError};
pub use slug::identifier;
