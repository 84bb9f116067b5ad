//! List documents tool handler

use super::handler::{text_content, McpToolHandler};
use super::helpers::document_row;
use crate::core::services::Services;
use crate::core::types::DocumentStatus;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListDocumentsHandler {
    services: Arc<Services>,
}

impl ListDocumentsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for ListDocumentsHandler {
    fn name(&self) -> &str {
        "list_documents"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_documents".to_string(),
            description: "List all stored documents, newest first, with size and status. \
                         Use the ids with get_document."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let documents = self
            .services
            .blocking(|s| s.store.list_documents())
            .await?;

        if documents.is_empty() {
            return Ok(text_content(
                "No documents stored. Import files with `vault-search import <path>`.".to_string(),
            ));
        }

        let ready = documents
            .iter()
            .filter(|d| d.status == DocumentStatus::Ready)
            .count();

        let mut output = format!(
            "# Documents ({} total, {} ready)\n\n",
            documents.len(),
            ready
        );
        output.push_str("| ID | Filename | Size | Status | Created |\n");
        output.push_str("|----|----------|------|--------|---------|\n");
        for doc in &documents {
            output.push_str(&document_row(doc));
        }

        Ok(text_content(output))
    }
}
