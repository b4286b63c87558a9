pub mod api;
pub mod types;

pub use api::{DOCUMENTS_PATH, document_path};
pub use types::*;
