//! Storage layer for documents and their extracted text.
//!
//! The search service never touches the filesystem directly. It asks a
//! [`DocumentSource`] for the current set of searchable documents; the
//! on-disk [`DocumentStore`] is the implementation the binaries use.
//!
//! # Document Storage Structure
//!
//! ```text
//! {data_dir}/documents/
//! ├── {document-id-1}/
//! │   ├── meta.json           # Document metadata
//! │   └── text.txt            # Extracted text (once ready)
//! ```

mod extract;
mod store;
mod walker;

use crate::core::error::Result;
use crate::core::types::Document;

pub use extract::{clean_text, extract_pdf_text, guess_mime_type, PDF_MIME_TYPE};
pub use store::DocumentStore;
pub use walker::FileWalker;

/// Provider of the candidate documents a search scans
pub trait DocumentSource: Send + Sync {
    /// Return every document that is ready and has non-empty text
    fn load_searchable(&self) -> Result<Vec<Document>>;
}

impl DocumentSource for Vec<Document> {
    fn load_searchable(&self) -> Result<Vec<Document>> {
        Ok(self.iter().filter(|d| d.is_searchable()).cloned().collect())
    }
}
