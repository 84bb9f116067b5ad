//! MCP tools exposing document search and retrieval

pub mod get_document;
pub mod get_server_info;
pub mod handler;
pub mod helpers;
pub mod list_documents;
pub mod registry;
pub mod search_documents;

pub use get_document::GetDocumentHandler;
pub use get_server_info::GetServerInfoHandler;
pub use handler::{result_text, text_content, McpToolHandler};
pub use helpers::{format_bytes, truncate_text};
pub use list_documents::ListDocumentsHandler;
pub use registry::ToolRegistry;
pub use search_documents::SearchDocumentsHandler;
