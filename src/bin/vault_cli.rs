//! vault-search CLI
//!
//! Import, search and manage documents from the command line.
//!
//! ```bash
//! vault-search import ~/notes
//! vault-search search "quarterly revenue" -k 5
//! vault-search list-documents --format json
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vault_search::cli::{run, Cli};

fn init_logging() {
    let filter = EnvFilter::try_from_env("VAULT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
