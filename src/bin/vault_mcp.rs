//! vault-search MCP server
//!
//! Serves document search tools to MCP clients over stdio. Stdout carries
//! protocol messages only; logs go to stderr.

use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vault_search::core::config::Config;
use vault_search::core::services::Services;
use vault_search::core::types::DocumentStatus;
use vault_search::core::xdg::{migrate_legacy_paths, XdgDirs};
use vault_search::mcp::McpServer;

fn init_logging() {
    let filter = EnvFilter::try_from_env("VAULT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("vault_search=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .init();
}

/// Log what the store holds so a misconfigured data dir is visible early
fn summarize_store(services: &Services) {
    match services.store.list_documents() {
        Ok(docs) => {
            let failed = docs
                .iter()
                .filter(|d| d.status == DocumentStatus::Error)
                .count();
            tracing::info!(
                "Document store at {} holds {} document(s)",
                services.store.data_dir().display(),
                docs.len()
            );
            if failed > 0 {
                tracing::warn!("{} document(s) failed import and are not searchable", failed);
            }
        }
        Err(e) => tracing::error!("Failed to read document store: {}", e),
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let xdg = XdgDirs::new();
    if let Err(e) = xdg.ensure_dirs_exist() {
        eprintln!("Failed to create XDG directories: {e}");
        std::process::exit(1);
    }

    if let Err(e) = migrate_legacy_paths(&xdg) {
        tracing::warn!("Migration warning: {}", e);
    }

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    let services = Arc::new(Services::new(config));
    summarize_store(&services);

    let mut server = McpServer::new(services);
    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
