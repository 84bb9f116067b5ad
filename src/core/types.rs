//! Core data types for the vault search service.
//!
//! This module defines the data structures shared by the core and
//! all adapters: documents and their metadata, search matches and
//! results, and the request/response shapes of the search operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Processing state of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Text extraction has not finished
    Processing,
    /// Extracted text is available
    Ready,
    /// Extraction failed (see `error_message`)
    Error,
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DocumentStatus::Processing => "processing",
            DocumentStatus::Ready => "ready",
            DocumentStatus::Error => "error",
        };
        f.write_str(s)
    }
}

/// Persisted document metadata (everything except the text body)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Unique document identifier
    pub id: String,

    /// Display name of the original file
    pub filename: String,

    /// Size of the original file in bytes
    pub file_size: u64,

    /// MIME type of the original file
    pub mime_type: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Processing state
    pub status: DocumentStatus,

    /// Failure reason when `status` is `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Path the document was imported from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,

    /// Number of characters of extracted text
    #[serde(default)]
    pub text_chars: usize,
}

/// A document as seen by the search engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub filename: String,

    /// Extracted plain text; `None` or empty means not searchable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(rename = "file_size")]
    pub size: u64,

    pub mime_type: String,
    pub created_at: DateTime<Utc>,
    pub status: DocumentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Document {
    /// Build a document from stored metadata and (optional) text
    pub fn from_metadata(metadata: DocumentMetadata, text: Option<String>) -> Self {
        Self {
            id: metadata.id,
            filename: metadata.filename,
            text,
            size: metadata.file_size,
            mime_type: metadata.mime_type,
            created_at: metadata.created_at,
            status: metadata.status,
            error_message: metadata.error_message,
        }
    }

    /// Ready and carrying non-empty text
    pub fn is_searchable(&self) -> bool {
        self.status == DocumentStatus::Ready
            && self.text.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// One occurrence of a term inside a document's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The normalized term that matched
    pub term: String,

    /// Snippet around the occurrence, with `...` markers when cut
    pub context: String,

    /// Zero-based character offset of the match in the original text
    pub position: usize,
}

/// Search result for a single document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub filename: String,

    #[serde(rename = "file_size")]
    pub size: u64,

    pub mime_type: String,
    pub created_at: DateTime<Utc>,

    /// Relevance score (filename hits weigh 10, content hits 1)
    pub score: u32,

    /// First few occurrences across all terms
    pub matches: Vec<Match>,

    /// Leading excerpt of the document text
    pub preview: String,
}

/// Request to search the document vault
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query; non-string values are treated as empty
    #[serde(default, deserialize_with = "lenient_query")]
    pub query: String,

    /// Maximum number of results (optional)
    #[serde(default, deserialize_with = "lenient_limit")]
    pub limit: Option<i64>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, limit: Option<i64>) -> Self {
        Self {
            query: query.into(),
            limit,
        }
    }
}

fn lenient_query<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_limit<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    })
}

/// Response from a search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Original query string
    pub query: String,

    /// Ranked results
    pub results: Vec<SearchResult>,

    /// Number of results returned
    pub count: usize,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}

impl SearchResponse {
    pub fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            results: Vec::new(),
            count: 0,
            duration_ms: 0,
        }
    }
}

/// Statistics from an import operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportStats {
    /// Documents that reached `ready`
    pub documents_ready: usize,

    /// Documents that ended in `error`
    pub documents_failed: usize,

    /// Ids of all documents created by the import
    pub document_ids: Vec<String>,

    /// Import duration in milliseconds
    pub duration_ms: u64,
}

/// Response from listing documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsResponse {
    pub documents: Vec<DocumentMetadata>,
}

/// Response from deleting a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Status message
    pub status: String,

    /// Id of the deleted document
    pub id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
