//! CLI adapter for vault-search
//!
//! Command-line access to search, import and document management.
//! This module is parallel to `http/` and `mcp/`; all three depend on
//! `core/` but not on each other.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// vault-search - document search with ranked snippets
///
/// Import plain-text documents and search them by keyword. Results are
/// ranked by filename and content hits and show the text around each
/// match.
#[derive(Parser, Debug)]
#[command(name = "vault-search")]
#[command(version)]
#[command(about = "Document search and ranking", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names match MCP tool names (underscores become hyphens).
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search documents by keyword
    Search(commands::SearchArgs),

    /// Import a text file or a directory of text files
    Import(commands::ImportArgs),

    /// List stored documents, newest first
    #[command(name = "list-documents")]
    ListDocuments(commands::documents::ListArgs),

    /// Show a document and its extracted text
    #[command(name = "get-document")]
    GetDocument(commands::documents::GetArgs),

    /// Delete a document
    #[command(name = "delete-document")]
    DeleteDocument(commands::documents::DeleteArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and server information
    #[command(name = "get-server-info")]
    GetServerInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  vault-search completions bash > ~/.local/share/bash-completion/completions/vault-search
    ///   zsh:   vault-search completions zsh > ~/.zfunc/_vault-search
    ///   fish:  vault-search completions fish > ~/.config/fish/completions/vault-search.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::{migrate_legacy_paths, XdgDirs};
    use std::sync::Arc;

    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        command => command,
    };

    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;

    if let Err(e) = migrate_legacy_paths(&xdg) {
        output::print_warning(&format!("Migration issue: {e}"));
    }

    let config = Config::load()?;
    let services = Arc::new(Services::new(config));

    execute(command, &services, cli.format).await
}

/// Dispatch a command against existing services
pub async fn execute(
    command: Commands,
    services: &std::sync::Arc<crate::core::services::Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Search(args) => commands::search::execute(args, services, format).await,
        Commands::Import(args) => commands::import::execute(args, services, format).await,
        Commands::ListDocuments(args) => {
            commands::documents::execute_list(args, services, format).await
        }
        Commands::GetDocument(args) => {
            commands::documents::execute_get(args, services, format).await
        }
        Commands::DeleteDocument(args) => {
            commands::documents::execute_delete(args, services, format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, services, format).await,
        Commands::GetServerInfo(args) => commands::info::execute(args, services, format).await,
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
