//! MCP-specific error types

use crate::core::error::VaultError;
use crate::mcp::protocol::{
    DOCUMENT_NOT_FOUND, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, PARSE_ERROR,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Tool error (code {0}): {1}")]
    ToolError(i32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code and message for this error
    pub fn code_and_message(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::ToolError(code, msg) => (*code, msg.clone()),
            McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }
}

impl From<VaultError> for McpError {
    fn from(err: VaultError) -> Self {
        match err {
            VaultError::DocumentNotFound(id) => {
                McpError::ToolError(DOCUMENT_NOT_FOUND, format!("Document not found: {id}"))
            }
            VaultError::InvalidPath(p) => McpError::InvalidParams(format!("Invalid path: {p}")),
            VaultError::InvalidQuery(q) => McpError::InvalidParams(format!("Invalid query: {q}")),
            VaultError::ConfigError(s) => {
                McpError::InvalidParams(format!("Configuration error: {s}"))
            }
            VaultError::ImportFailed(s) => McpError::InternalError(format!("Import failed: {s}")),
            VaultError::StorageError(s) => McpError::InternalError(format!("Storage error: {s}")),
            VaultError::IoError(e) => McpError::InternalError(format!("I/O error: {e}")),
            VaultError::SerdeError(e) => {
                McpError::InternalError(format!("Serialization error: {e}"))
            }
            VaultError::TomlError(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
        }
    }
}
