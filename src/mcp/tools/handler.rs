//! Tool handler trait

use crate::mcp::error::McpError;
use crate::mcp::protocol::{ContentBlock, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::Value;

/// An MCP tool: a name, an input schema and an async body
#[async_trait]
pub trait McpToolHandler: Send + Sync {
    /// Tool name as used in `tools/call`
    fn name(&self) -> &str;

    /// Schema advertised by `tools/list`
    fn schema(&self) -> ToolSchema;

    /// Run the tool with raw JSON arguments
    async fn execute(&self, args: Value) -> Result<ToolResult, McpError>;
}

/// Wrap markdown text as a single-block tool result
pub fn text_content(text: String) -> ToolResult {
    ToolResult {
        content: vec![ContentBlock::Text { text }],
    }
}

/// Extract the text of a single-block result
pub fn result_text(result: &ToolResult) -> Option<&str> {
    result.content.first().map(|block| match block {
        ContentBlock::Text { text } => text.as_str(),
    })
}
