//! Argument parsing for the CLI surface

use clap::Parser;
use vault_search::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_parse_search_with_limit() {
    let cli = Cli::try_parse_from(["vault-search", "search", "quarterly revenue", "-k", "5"]).unwrap();

    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.query, "quarterly revenue");
            assert_eq!(args.limit, Some(5));
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert_eq!(cli.format, OutputFormat::Human);
}

#[test]
fn test_parse_negative_limit() {
    let cli = Cli::try_parse_from(["vault-search", "search", "budget", "--limit", "-2"]).unwrap();
    match cli.command {
        Commands::Search(args) => assert_eq!(args.limit, Some(-2)),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_global_json_format() {
    let cli = Cli::try_parse_from(["vault-search", "list-documents", "--format", "json"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(matches!(cli.command, Commands::ListDocuments(_)));
}

#[test]
fn test_parse_import_patterns() {
    let cli = Cli::try_parse_from([
        "vault-search",
        "import",
        "/tmp/docs",
        "--include",
        "*.md",
        "-i",
        "*.txt",
        "--exclude",
        "**/drafts/**",
    ])
    .unwrap();

    match cli.command {
        Commands::Import(args) => {
            assert_eq!(args.include, vec!["*.md", "*.txt"]);
            assert_eq!(args.exclude, vec!["**/drafts/**"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["vault-search", "index-repository"]).is_err());
}
