//! Get document tool handler

use super::handler::{text_content, McpToolHandler};
use super::helpers::{format_bytes, truncate_text};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

const DEFAULT_MAX_CHARS: usize = 5000;

#[derive(Debug, Deserialize)]
struct GetDocumentArgs {
    id: String,
    #[serde(default)]
    max_chars: Option<usize>,
}

pub struct GetDocumentHandler {
    services: Arc<Services>,
}

impl GetDocumentHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for GetDocumentHandler {
    fn name(&self) -> &str {
        "get_document"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_document".to_string(),
            description: "Fetch one stored document by id: metadata plus its extracted text. \
                         Long text is truncated to max_chars."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "Document id from search_documents or list_documents"
                    },
                    "max_chars": {
                        "type": "integer",
                        "description": "Maximum characters of text to return",
                        "default": DEFAULT_MAX_CHARS,
                        "minimum": 1
                    }
                },
                "required": ["id"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: GetDocumentArgs = serde_json::from_value(args)
            .map_err(|e| McpError::InvalidParams(format!("Invalid arguments: {e}")))?;
        let max_chars = args.max_chars.unwrap_or(DEFAULT_MAX_CHARS).max(1);

        let id = args.id;
        let doc = self
            .services
            .blocking(move |s| s.store.get_document(&id))
            .await?;

        let mut output = format!("# {}\n\n", doc.filename);
        output.push_str(&format!("- **ID:** `{}`\n", doc.id));
        output.push_str(&format!("- **Type:** {}\n", doc.mime_type));
        output.push_str(&format!("- **Size:** {}\n", format_bytes(doc.size)));
        output.push_str(&format!("- **Status:** {}\n", doc.status));
        output.push_str(&format!(
            "- **Created:** {}\n\n",
            doc.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        match doc.text.as_deref() {
            Some(text) if !text.is_empty() => {
                output.push_str("## Text\n\n");
                output.push_str(&truncate_text(text, max_chars));
                output.push('\n');
            }
            _ => output.push_str("_No extracted text._\n"),
        }

        Ok(text_content(output))
    }
}
