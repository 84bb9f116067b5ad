//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also list the include/exclude patterns
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Configuration:"));
            println!("  data_dir: {}", config.storage.data_dir.display());
            println!("  search:");
            println!("    default_limit: {}", config.search.default_limit);
            println!("    max_limit: {}", config.search.max_limit);
            println!("    max_query_length: {}", config.search.max_query_length);
            println!("  documents:");
            println!("    max_file_size_mb: {}", config.documents.max_file_size_mb);
            println!(
                "    max_extracted_chars: {}",
                config.documents.max_extracted_chars
            );
            if args.all {
                println!(
                    "    include_patterns: {:?}",
                    config.documents.include_patterns
                );
                println!(
                    "    exclude_patterns: {:?}",
                    config.documents.exclude_patterns
                );
            }
            println!("  server: {}", config.bind_address());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }

    Ok(())
}
