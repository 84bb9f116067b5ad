//! Search command - search stored documents

use crate::cli::output::{colors, format_bytes, highlight_terms};
use crate::cli::OutputFormat;
use crate::core::search::normalize_query;
use crate::core::services::Services;
use crate::core::types::{SearchRequest, SearchResponse};
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query; words of two characters or fewer are ignored
    pub query: String,

    /// Maximum number of results (uses the configured default if omitted)
    #[arg(long, short = 'k', allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Only show filenames (no snippets)
    #[arg(long)]
    pub files_only: bool,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = services
        .search
        .search(SearchRequest::new(args.query.clone(), args.limit))?;

    match format {
        OutputFormat::Human => print_human(&args, &response),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}

fn print_human(args: &SearchArgs, response: &SearchResponse) {
    if response.results.is_empty() {
        println!("No results found for '{}'", colors::label(&args.query));
        return;
    }

    let terms = normalize_query(&args.query);

    println!(
        "Found {} result(s) in {}ms:\n",
        colors::number(&response.count.to_string()),
        response.duration_ms
    );

    for (i, result) in response.results.iter().enumerate() {
        if args.files_only {
            println!("{}", colors::file_path(&result.filename));
            continue;
        }

        println!(
            "[{}] {} {} {}",
            colors::rank(&(i + 1).to_string()),
            colors::file_path(&result.filename),
            colors::score(&format!("(score: {})", result.score)),
            colors::dim(&format!("{} · {}", format_bytes(result.size), result.id))
        );

        if result.matches.is_empty() {
            println!("    {}", colors::dim(&result.preview));
        }
        for m in &result.matches {
            println!(
                "    {} {}",
                colors::dim(&format!("@{}", m.position)),
                highlight_terms(&m.context, &terms)
            );
        }
        println!();
    }
}
