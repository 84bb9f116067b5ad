//! vault-search - document search and ranking
//!
//! Scans the extracted text of stored documents for query terms,
//! scores each document, cuts context snippets around matches and
//! returns a ranked, capped result list.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - search (normalization, ranking, service)
//!   - storage (document store, plain-text import)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//! - **http**: REST API adapter (depends on core)
//! - **mcp**: MCP adapter (depends on core)

pub mod cli;
pub mod core;
pub mod http;
pub mod mcp;

pub use core::config::Config;
pub use core::error::{Result, VaultError};
pub use core::services::Services;
pub use core::types::*;
