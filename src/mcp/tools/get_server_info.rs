//! Get server info tool handler

use super::handler::{text_content, McpToolHandler};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema, PROTOCOL_VERSION};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetServerInfoHandler {
    services: Arc<Services>,
    tool_names: Vec<String>,
}

impl GetServerInfoHandler {
    /// `tool_names` is the set advertised by the running server
    pub fn new(services: Arc<Services>, tool_names: Vec<String>) -> Self {
        Self {
            services,
            tool_names,
        }
    }

    fn format_info(&self) -> Result<String, McpError> {
        let documents = self.services.store.list_documents()?;
        let config = &self.services.config;

        let mut output = String::from("# vault-search MCP Server\n\n");

        output.push_str("## Version\n");
        output.push_str(&format!("- **Version:** {}\n", env!("CARGO_PKG_VERSION")));
        output.push_str(&format!("- **Protocol:** MCP {PROTOCOL_VERSION}\n\n"));

        output.push_str("## Storage\n");
        output.push_str(&format!(
            "- **Data directory:** {}\n",
            self.services.store.data_dir().display()
        ));
        output.push_str(&format!("- **Documents:** {}\n\n", documents.len()));

        output.push_str("## Search Limits\n");
        output.push_str(&format!(
            "- **Default limit:** {}\n- **Max limit:** {}\n- **Max query length:** {}\n\n",
            config.search.default_limit, config.search.max_limit, config.search.max_query_length
        ));

        output.push_str("## Available Tools\n");
        for name in &self.tool_names {
            output.push_str(&format!("- {name}\n"));
        }

        Ok(output)
    }
}

#[async_trait]
impl McpToolHandler for GetServerInfoHandler {
    fn name(&self) -> &str {
        "get_server_info"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_server_info".to_string(),
            description: "Show server version, protocol, storage location, search limits \
                         and the available tools."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        Ok(text_content(self.format_info()?))
    }
}
