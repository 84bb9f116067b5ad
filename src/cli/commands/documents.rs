//! Document commands - list, get and delete stored documents
//!
//! Exposed as top-level commands matching MCP tool names:
//! - `list-documents` (MCP: list_documents)
//! - `get-document` (MCP: get_document)
//! - `delete-document`

use crate::cli::output::{colors, format_bytes, format_relative_time};
use crate::cli::OutputFormat;
use crate::core::search::preview;
use crate::core::services::Services;
use crate::core::types::{DeleteResponse, DocumentStatus, DocumentsResponse};
use clap::Args;
use std::io::{self, Write};
use std::sync::Arc;

/// Arguments for listing documents
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Arguments for showing a document
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Document ID
    pub id: String,

    /// Print the full extracted text instead of a preview
    #[arg(long)]
    pub full: bool,
}

/// Arguments for deleting a document
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Document ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

fn status_colored(status: DocumentStatus) -> colored::ColoredString {
    let s = status.to_string();
    match status {
        DocumentStatus::Ready => colors::success(&s),
        DocumentStatus::Processing => colors::warning(&s),
        DocumentStatus::Error => colors::error(&s),
    }
}

fn not_found(id: &str) -> String {
    format!("Document '{id}' not found. Run 'vault-search list-documents' to see stored documents.")
}

/// Execute list-documents command
pub async fn execute_list(
    _args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let documents = services.store.list_documents()?;

    match format {
        OutputFormat::Human => {
            if documents.is_empty() {
                println!(
                    "No documents found. Run '{}' to add some.",
                    colors::label("vault-search import <path>")
                );
                return Ok(());
            }

            println!(
                "{} ({}):",
                colors::label("Documents"),
                colors::number(&documents.len().to_string())
            );
            for doc in &documents {
                println!(
                    "  {}  {:<32} {:>10}  {:<10} {}",
                    colors::document_id(&doc.id),
                    colors::file_path(&doc.filename),
                    colors::number(&format_bytes(doc.file_size)),
                    status_colored(doc.status),
                    colors::dim(&format_relative_time(&doc.created_at))
                );
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&DocumentsResponse { documents })?
            );
        }
    }

    Ok(())
}

/// Execute get-document command
pub async fn execute_get(
    args: GetArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = services
        .store
        .get_metadata(&args.id)
        .map_err(|_| not_found(&args.id))?;
    let document = services.store.get_document(&args.id)?;

    match format {
        OutputFormat::Human => {
            println!(
                "{}: {}",
                colors::label("Document"),
                colors::document_id(&metadata.id)
            );
            println!(
                "  {}: {}",
                colors::label("Filename"),
                colors::file_path(&metadata.filename)
            );
            println!(
                "  {}: {}",
                colors::label("Size"),
                colors::number(&format_bytes(metadata.file_size))
            );
            println!("  {}: {}", colors::label("Type"), metadata.mime_type);
            println!("  {}: {}", colors::label("Status"), status_colored(metadata.status));
            if let Some(message) = &metadata.error_message {
                println!("  {}: {}", colors::label("Error"), colors::error(message));
            }
            println!(
                "  {}: {}",
                colors::label("Created"),
                colors::dim(&metadata.created_at.to_rfc3339())
            );
            if let Some(source) = &metadata.source_path {
                println!(
                    "  {}: {}",
                    colors::label("Source"),
                    colors::file_path(&source.display().to_string())
                );
            }

            if let Some(text) = document.text.as_deref().filter(|t| !t.is_empty()) {
                println!(
                    "  {}: {} chars",
                    colors::label("Text"),
                    colors::number(&metadata.text_chars.to_string())
                );
                println!();
                if args.full {
                    println!("{text}");
                } else {
                    println!("{}", colors::dim(&preview(text)));
                }
            }
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&metadata)?;
            if let Some(text) = document.text {
                let shown = if args.full { text } else { preview(&text) };
                value["text"] = serde_json::Value::String(shown);
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

/// Execute delete-document command
pub async fn execute_delete(
    args: DeleteArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !services.store.document_exists(&args.id) {
        return Err(not_found(&args.id).into());
    }

    if !args.force {
        print!(
            "Delete document '{}'? [y/N] ",
            colors::document_id(&args.id)
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", colors::dim("Cancelled."));
            return Ok(());
        }
    }

    services.store.delete_document(&args.id)?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} document '{}'",
                colors::success("Deleted"),
                colors::document_id(&args.id)
            );
        }
        OutputFormat::Json => {
            let response = DeleteResponse {
                status: "deleted".to_string(),
                id: args.id,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
