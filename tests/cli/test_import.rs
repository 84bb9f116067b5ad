//! Tests for the import command

use crate::common::{create_test_services, TestCorpus};
use std::path::PathBuf;
use vault_search::cli::commands::import::{execute, ImportArgs};
use vault_search::cli::OutputFormat;

#[tokio::test]
async fn test_import_directory_uses_config_patterns() {
    let (services, _temp) = create_test_services();
    let corpus = TestCorpus::small();

    let args = ImportArgs {
        path: corpus.path().to_path_buf(),
        include: vec![],
        exclude: vec![],
    };
    execute(args, &services, OutputFormat::Human).await.unwrap();

    let docs = services.store.list_documents().unwrap();
    assert_eq!(docs.len(), 6);
    assert!(docs.iter().any(|d| d.filename == "invoice.pdf"));
}

#[tokio::test]
async fn test_import_directory_with_custom_include() {
    let (services, _temp) = create_test_services();
    let corpus = TestCorpus::small();

    let args = ImportArgs {
        path: corpus.path().to_path_buf(),
        include: vec!["*.md".to_string()],
        exclude: vec![],
    };
    execute(args, &services, OutputFormat::Json).await.unwrap();

    let docs = services.store.list_documents().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].filename, "budget.md");
}

#[tokio::test]
async fn test_import_single_file() {
    let (services, _temp) = create_test_services();
    let corpus = TestCorpus::with_files(&[("plan.txt", "Launch plan for spring")]);

    let args = ImportArgs {
        path: corpus.files[0].clone(),
        include: vec![],
        exclude: vec![],
    };
    execute(args, &services, OutputFormat::Human).await.unwrap();

    let response = services.search.search_query("launch", None).unwrap();
    assert_eq!(response.results.len(), 1);
}

#[tokio::test]
async fn test_import_nonexistent_path() {
    let (services, _temp) = create_test_services();

    let args = ImportArgs {
        path: PathBuf::from("/nonexistent/vault/path"),
        include: vec![],
        exclude: vec![],
    };
    let err = execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid path"));
}

#[tokio::test]
async fn test_import_invalid_pattern() {
    let (services, _temp) = create_test_services();
    let corpus = TestCorpus::small();

    let args = ImportArgs {
        path: corpus.path().to_path_buf(),
        include: vec!["[".to_string()],
        exclude: vec![],
    };
    assert!(execute(args, &services, OutputFormat::Human).await.is_err());
}
