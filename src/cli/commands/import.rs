//! Import command - add text files to the document store

use crate::cli::output::{colors, format_duration_ms};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{DocumentStatus, ImportStats};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// File or directory to import
    pub path: PathBuf,

    /// Glob patterns to include (can be specified multiple times)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,
}

/// Execute the import command
///
/// Directories use the configured patterns unless overridden.
pub async fn execute(
    args: ImportArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = args.path.canonicalize().map_err(|e| {
        format!(
            "Invalid path '{}': {}. Make sure the path exists and is accessible.",
            args.path.display(),
            e
        )
    })?;

    let stats = if path.is_dir() {
        let documents = &services.config.documents;
        let include = if args.include.is_empty() {
            documents.include_patterns.clone()
        } else {
            args.include
        };
        let exclude = if args.exclude.is_empty() {
            documents.exclude_patterns.clone()
        } else {
            args.exclude
        };

        services.store.import_directory(&path, &include, &exclude)?
    } else {
        let start = Instant::now();
        let metadata = services.store.import_file(&path)?;
        let ready = metadata.status == DocumentStatus::Ready;
        ImportStats {
            documents_ready: usize::from(ready),
            documents_failed: usize::from(!ready),
            document_ids: vec![metadata.id],
            duration_ms: start.elapsed().as_millis() as u64,
        }
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} document(s) from {} in {}",
                colors::success("Imported"),
                colors::number(&stats.documents_ready.to_string()),
                colors::file_path(&path.display().to_string()),
                format_duration_ms(stats.duration_ms)
            );
            if stats.documents_failed > 0 {
                println!(
                    "  {} {} file(s) could not be extracted",
                    colors::warning("Skipped"),
                    colors::number(&stats.documents_failed.to_string())
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }

    Ok(())
}
