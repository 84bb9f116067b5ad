//! Tests for get-server-info, show-config and completions

use crate::common::{create_test_services, store_document};
use clap_complete::Shell;
use vault_search::cli::commands::completions::write_completions;
use vault_search::cli::commands::{config, info, ConfigArgs, InfoArgs};
use vault_search::cli::OutputFormat;

#[tokio::test]
async fn test_info_basic_and_detailed() {
    let (services, _temp) = create_test_services();
    store_document(&services, "a.txt", "alpha");

    for detailed in [false, true] {
        for format in [OutputFormat::Human, OutputFormat::Json] {
            let result = info::execute(InfoArgs { detailed }, &services, format).await;
            assert!(result.is_ok());
        }
    }
}

#[tokio::test]
async fn test_show_config() {
    let (services, _temp) = create_test_services();

    for all in [false, true] {
        for format in [OutputFormat::Human, OutputFormat::Json] {
            let result = config::execute(ConfigArgs { all }, &services, format).await;
            assert!(result.is_ok());
        }
    }
}

#[test]
fn test_completions_mention_subcommands() {
    let mut out = Vec::new();
    write_completions(Shell::Bash, &mut out);
    let script = String::from_utf8(out).unwrap();

    assert!(script.contains("vault-search"));
    assert!(script.contains("list-documents"));
    assert!(script.contains("get-server-info"));
}
