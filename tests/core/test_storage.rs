//! Document store integration tests

use crate::common::{create_test_services, import_corpus, store_document, TestCorpus};
use vault_search::core::storage::DocumentSource;
use vault_search::core::types::DocumentStatus;

#[test]
fn test_import_directory_with_default_patterns() {
    let (services, _temp) = create_test_services();
    let corpus = TestCorpus::small();

    let stats = import_corpus(&services, corpus.path());

    // four text files and the pdf placeholder ready, whitespace-only file failed
    assert_eq!(stats.documents_ready, 5);
    assert_eq!(stats.documents_failed, 1);
    assert_eq!(stats.document_ids.len(), 6);

    let docs = services.store.list_documents().unwrap();
    assert_eq!(docs.len(), 6);
    let invoice = docs.iter().find(|d| d.filename == "invoice.pdf").unwrap();
    assert_eq!(invoice.status, DocumentStatus::Ready);
    assert_eq!(invoice.mime_type, "application/pdf");
    assert!(docs.iter().all(|d| d.filename != "secret.txt"));

    let failed: Vec<_> = docs
        .iter()
        .filter(|d| d.status == DocumentStatus::Error)
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].filename, "empty.txt");
    assert!(failed[0].error_message.is_some());
}

#[test]
fn test_import_then_search_then_delete() {
    let (services, _temp) = create_test_services();
    let corpus = TestCorpus::small();
    import_corpus(&services, corpus.path());

    let response = services.search.search_query("revenue", None).unwrap();
    assert_eq!(response.results.len(), 1);
    let id = response.results[0].id.clone();
    assert_eq!(response.results[0].filename, "q3-report.txt");

    services.store.delete_document(&id).unwrap();
    assert!(!services.store.document_exists(&id));

    let response = services.search.search_query("revenue", None).unwrap();
    assert!(response.results.is_empty());
}

#[test]
fn test_imported_pdf_is_searchable() {
    let (services, _temp) = create_test_services();
    let corpus = TestCorpus::with_files(&[(
        "deck.pdf",
        "%PDF-1.4\n(Migration plan for the warehouse cluster and its replication setup) \
         (with a rollback checklist owned by the infrastructure group)",
    )]);
    import_corpus(&services, corpus.path());

    let response = services.search.search_query("rollback", None).unwrap();
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].filename, "deck.pdf");
    assert_eq!(response.results[0].score, 1);

    let response = services.search.search_query("invoice deck", None).unwrap();
    assert_eq!(response.results.len(), 1);
}

#[test]
fn test_import_single_file_records_source() {
    let (services, _temp) = create_test_services();
    let corpus = TestCorpus::with_files(&[("memo.txt", "Memo   about\n\n the   offsite")]);

    let metadata = services.store.import_file(&corpus.files[0]).unwrap();

    assert_eq!(metadata.status, DocumentStatus::Ready);
    assert_eq!(metadata.mime_type, "text/plain");
    assert_eq!(metadata.source_path.as_deref(), Some(corpus.files[0].as_path()));

    let doc = services.store.get_document(&metadata.id).unwrap();
    assert_eq!(doc.text.as_deref(), Some("Memo about the offsite"));
}

#[test]
fn test_import_missing_path_fails() {
    let (services, temp) = create_test_services();
    let missing = temp.path().join("does-not-exist.txt");

    let err = services.store.import_file(&missing).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_searchable_view_is_oldest_first() {
    let (services, _temp) = create_test_services();
    let first = store_document(&services, "one.txt", "first body");
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = store_document(&services, "two.txt", "second body");
    std::thread::sleep(std::time::Duration::from_millis(5));

    let pending = services
        .store
        .create_document("pending.txt", 3, "text/plain")
        .unwrap();

    let searchable = services.store.load_searchable().unwrap();
    let ids: Vec<&str> = searchable.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec![first.id.as_str(), second.id.as_str()]);
    assert!(!ids.contains(&pending.id.as_str()));

    let listed = services.store.list_documents().unwrap();
    assert_eq!(listed[0].id, pending.id);
}

#[test]
fn test_unknown_and_path_like_ids_not_found() {
    let (services, _temp) = create_test_services();

    for id in ["missing", "../etc/passwd", "a/b"] {
        let err = services.store.get_document(id).unwrap_err();
        assert!(err.is_not_found(), "id {id:?}");
    }
}
