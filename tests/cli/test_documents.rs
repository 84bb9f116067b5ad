//! Tests for list-documents, get-document and delete-document

use crate::common::{create_test_services, store_document};
use vault_search::cli::commands::documents::{
    execute_delete, execute_get, execute_list, DeleteArgs, GetArgs, ListArgs,
};
use vault_search::cli::{execute, Commands, OutputFormat};

#[tokio::test]
async fn test_list_empty_store() {
    let (services, _temp) = create_test_services();

    assert!(execute_list(ListArgs {}, &services, OutputFormat::Human)
        .await
        .is_ok());
    assert!(execute_list(ListArgs {}, &services, OutputFormat::Json)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_get_document_preview_and_full() {
    let (services, _temp) = create_test_services();
    let doc = store_document(&services, "memo.txt", &"memo text ".repeat(100));

    for full in [false, true] {
        let args = GetArgs {
            id: doc.id.clone(),
            full,
        };
        assert!(execute_get(args, &services, OutputFormat::Human).await.is_ok());
    }

    let args = GetArgs {
        id: doc.id.clone(),
        full: false,
    };
    assert!(execute_get(args, &services, OutputFormat::Json).await.is_ok());
}

#[tokio::test]
async fn test_get_unknown_document() {
    let (services, _temp) = create_test_services();

    let args = GetArgs {
        id: "missing".to_string(),
        full: false,
    };
    let err = execute_get(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("missing"));
}

#[tokio::test]
async fn test_delete_with_force() {
    let (services, _temp) = create_test_services();
    let doc = store_document(&services, "old.txt", "obsolete notes");

    let args = DeleteArgs {
        id: doc.id.clone(),
        force: true,
    };
    execute_delete(args, &services, OutputFormat::Json)
        .await
        .unwrap();

    assert!(!services.store.document_exists(&doc.id));
}

#[tokio::test]
async fn test_delete_unknown_document() {
    let (services, _temp) = create_test_services();

    let args = DeleteArgs {
        id: "missing".to_string(),
        force: true,
    };
    assert!(execute_delete(args, &services, OutputFormat::Human)
        .await
        .is_err());
}

#[tokio::test]
async fn test_dispatch_through_execute() {
    let (services, _temp) = create_test_services();
    store_document(&services, "a.txt", "alpha");

    let result = execute(
        Commands::ListDocuments(ListArgs {}),
        &services,
        OutputFormat::Human,
    )
    .await;
    assert!(result.is_ok());
}
