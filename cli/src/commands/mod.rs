//! Command implementations

pub mod config;
pub mod push;
pub mod slug;
pub mod version;
