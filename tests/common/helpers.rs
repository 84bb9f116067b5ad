// Test helper functions

use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use vault_search::core::config::Config;
use vault_search::core::services::Services;
use vault_search::core::types::{DocumentMetadata, ImportStats};

/// Services over a fresh temporary data directory (keep the TempDir alive)
#[allow(dead_code)]
pub fn create_test_services() -> (Arc<Services>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    config.storage.data_dir = temp_dir.path().to_path_buf();

    (Arc::new(Services::new(config)), temp_dir)
}

/// Import a directory with the configured default patterns
#[allow(dead_code)]
pub fn import_corpus(services: &Services, root: &Path) -> ImportStats {
    let documents = &services.config.documents;
    services
        .store
        .import_directory(root, &documents.include_patterns, &documents.exclude_patterns)
        .expect("Import should succeed")
}

/// Create a ready document directly in the store
#[allow(dead_code)]
pub fn store_document(services: &Services, filename: &str, text: &str) -> DocumentMetadata {
    let created = services
        .store
        .create_document(filename, text.len() as u64, "text/plain")
        .expect("Failed to create document");
    services
        .store
        .complete_document(&created.id, text)
        .expect("Failed to complete document")
}
