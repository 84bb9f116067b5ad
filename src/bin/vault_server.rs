//! vault-search HTTP server entry point
//!
//! Serves the REST API over the configured document store.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vault_search::core::config::Config;
use vault_search::core::services::Services;
use vault_search::core::xdg::{migrate_legacy_paths, XdgDirs};
use vault_search::http;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("VAULT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("vault_search=info"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // VAULT_LOG_FORMAT=json switches to one JSON object per line
    let json_logs = std::env::var("VAULT_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting vault-search server");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let xdg = XdgDirs::new();
    xdg.log_paths();
    xdg.ensure_dirs_exist()?;

    if let Err(e) = migrate_legacy_paths(&xdg) {
        tracing::warn!("Migration warning: {}", e);
    }

    let config = Config::load()?;
    config.log_config();

    let addr = config.bind_address();
    let services = Arc::new(Services::new(config));
    let app = http::router(services);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Health check at http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
