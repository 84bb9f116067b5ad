//! Info command - show version and server information

use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::DocumentStatus;
use crate::mcp::PROTOCOL_VERSION;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Include document counts
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Server information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub protocol: String,
    pub data_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searchable: Option<usize>,
}

/// Execute the info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (documents, searchable) = if args.detailed {
        let all = services.store.list_documents()?;
        let ready = all
            .iter()
            .filter(|d| d.status == DocumentStatus::Ready)
            .count();
        (Some(all.len()), Some(ready))
    } else {
        (None, None)
    };

    let info = InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        protocol: format!("MCP {PROTOCOL_VERSION}"),
        data_dir: services.config.storage.data_dir.display().to_string(),
        documents,
        searchable,
    };

    match format {
        OutputFormat::Human => {
            println!("{} {}", info.name, info.version);
            println!("Protocol: {}", info.protocol);
            println!("Data: {}", info.data_dir);
            if let (Some(total), Some(ready)) = (info.documents, info.searchable) {
                println!("Documents: {total} ({ready} ready)");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
