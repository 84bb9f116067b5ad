//! Unified service container
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::{Result, VaultError};
use crate::core::search::SearchService;
use crate::core::storage::{DocumentSource, DocumentStore};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Document store for CRUD and import
    pub store: Arc<DocumentStore>,

    /// Search service backed by the store
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let store = Arc::new(
            DocumentStore::new(config.storage.data_dir.clone()).with_limits(
                config.documents.max_file_size_mb,
                config.documents.max_extracted_chars,
            ),
        );

        let source: Arc<dyn DocumentSource> = store.clone();
        let search = Arc::new(SearchService::new(
            source,
            config.search.default_limit,
            config.search.max_limit,
            config.search.max_query_length,
        ));

        Self {
            store,
            search,
            config: Arc::new(config),
        }
    }

    /// Run store or search work on the blocking thread pool
    ///
    /// Both touch the filesystem synchronously, so async adapters go
    /// through here instead of calling them on a runtime worker.
    pub async fn blocking<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&Services) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let services = self.clone();
        tokio::task::spawn_blocking(move || work(&services))
            .await
            .map_err(|e| VaultError::StorageError(format!("Blocking task failed: {e}")))?
    }
}
