//! Search documents tool handler

use super::handler::{text_content, McpToolHandler};
use super::helpers::format_bytes;
use crate::core::error::VaultError;
use crate::core::services::Services;
use crate::core::types::{SearchRequest, SearchResponse};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema, SEARCH_FAILED};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchDocumentsHandler {
    services: Arc<Services>,
}

impl SearchDocumentsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_results(response: &SearchResponse) -> String {
        let mut output = format!(
            "Found {} results for query '{}' ({}ms):\n\n",
            response.count, response.query, response.duration_ms
        );

        if response.results.is_empty() {
            output.push_str(
                "No results found. Terms shorter than three characters are ignored; \
                 try longer or different keywords.",
            );
            return output;
        }

        for (i, result) in response.results.iter().enumerate() {
            output.push_str(&format!(
                "## {}. {} (score: {})\n",
                i + 1,
                result.filename,
                result.score
            ));
            output.push_str(&format!(
                "**Document:** `{}` | {} | {}\n\n",
                result.id,
                result.mime_type,
                format_bytes(result.size)
            ));

            for m in &result.matches {
                output.push_str(&format!(
                    "- `{}` at {}: {}\n",
                    m.term, m.position, m.context
                ));
            }
            if !result.matches.is_empty() {
                output.push('\n');
            }

            output.push_str(&format!("> {}\n\n", result.preview));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for SearchDocumentsHandler {
    fn name(&self) -> &str {
        "search_documents"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_documents".to_string(),
            description: "Search stored documents by keyword. Terms are matched \
                         case-insensitively as substrings; filename hits outrank content hits. \
                         Returns ranked documents with up to five context snippets each \
                         and a short preview. Words of two characters or fewer are ignored."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Free-text query, e.g. 'quarterly revenue'",
                        "maxLength": self.services.config.search.max_query_length
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of results",
                        "default": self.services.config.search.default_limit,
                        "maximum": self.services.config.search.max_limit
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let request: SearchRequest = if args.is_null() {
            SearchRequest::default()
        } else {
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?
        };

        let response = self
            .services
            .blocking(move |s| s.search.search(request))
            .await
            .map_err(|e| match e {
                VaultError::InvalidQuery(_) => McpError::from(e),
                other => McpError::ToolError(SEARCH_FAILED, format!("Search failed: {other}")),
            })?;

        Ok(text_content(Self::format_results(&response)))
    }
}
