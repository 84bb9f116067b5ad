//! MCP (Model Context Protocol) adapter
//!
//! JSON-RPC 2.0 over stdio, exposing document search and retrieval as
//! MCP tools.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;
pub mod transport;

pub use error::McpError;
pub use protocol::PROTOCOL_VERSION;
pub use server::McpServer;
pub use tools::{McpToolHandler, ToolRegistry};
