//! Search module for term-frequency document search.
//!
//! This module turns queries into terms, scores documents and
//! extracts snippets around matches.

mod query;
mod ranking;
mod service;

pub use query::{fold_case, normalize_query, MIN_TERM_CHARS};
pub use ranking::{
    preview, rank_documents, score_document, CONTEXT_RADIUS, FILENAME_WEIGHT,
    MAX_MATCHES_PER_RESULT, MAX_OCCURRENCES_PER_TERM, PREVIEW_CHARS,
};
pub use service::SearchService;
