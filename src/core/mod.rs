//! Core domain logic (protocol-agnostic)
//!
//! This module contains all logic that is independent of the
//! invocation surface (CLI, HTTP, MCP).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **storage**: Document store and plain-text import
//! - **search**: Query normalization, ranking and the search service
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

pub use config::Config;
pub use error::{Result, VaultError};
pub use services::Services;
