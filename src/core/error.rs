//! Error types and error handling for the vault search service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (HTTP status codes,
//! MCP error codes) lives in the respective adapter modules.

use thiserror::Error;

/// Result type alias for vault search operations
pub type Result<T> = std::result::Result<T, VaultError>;

/// Main error type for the vault search service
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Import failed: {0}")]
    ImportFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl VaultError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            VaultError::DocumentNotFound(_) | VaultError::InvalidPath(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            VaultError::InvalidQuery(_) | VaultError::ConfigError(_)
        )
    }
}
