//! Search service: the single request/response search operation.
//!
//! Normalizes the query, short-circuits when no terms survive, loads
//! the searchable documents from a [`DocumentSource`] and ranks them.

use crate::core::error::{Result, VaultError};
use crate::core::search::query::normalize_query;
use crate::core::search::ranking::rank_documents;
use crate::core::storage::DocumentSource;
use crate::core::types::{SearchRequest, SearchResponse};
use std::sync::Arc;
use std::time::Instant;

/// Document search service
pub struct SearchService {
    source: Arc<dyn DocumentSource>,
    default_limit: usize,
    max_limit: usize,
    max_query_length: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(
        source: Arc<dyn DocumentSource>,
        default_limit: usize,
        max_limit: usize,
        max_query_length: usize,
    ) -> Self {
        Self {
            source,
            default_limit,
            max_limit,
            max_query_length,
        }
    }

    /// Execute a search request
    pub fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        self.search_query(&request.query, request.limit)
    }

    /// Execute a search with explicit parameters
    ///
    /// An empty query, a query without terms longer than two characters,
    /// or a non-positive limit yields an empty result list, not an error.
    ///
    /// # Errors
    ///
    /// - `InvalidQuery`: query has searchable terms and exceeds the
    ///   configured maximum length
    /// - `StorageError` / `IoError`: loading candidate documents failed
    pub fn search_query(&self, query: &str, limit: Option<i64>) -> Result<SearchResponse> {
        let start = Instant::now();

        let terms = normalize_query(query);
        if terms.is_empty() {
            tracing::debug!("No searchable terms in query {:?}", query);
            return Ok(SearchResponse::empty(query));
        }

        if query.chars().count() > self.max_query_length {
            return Err(VaultError::InvalidQuery(format!(
                "Query exceeds maximum length of {} characters",
                self.max_query_length
            )));
        }

        let limit = self.effective_limit(limit);
        if limit == 0 {
            tracing::debug!("Non-positive limit, returning no results");
            return Ok(SearchResponse::empty(query));
        }

        let candidates = self.source.load_searchable()?;
        tracing::debug!(
            terms = terms.len(),
            candidates = candidates.len(),
            limit,
            "Ranking documents"
        );

        let results = rank_documents(&terms, &candidates, limit);

        let duration_ms = start.elapsed().as_millis() as u64;
        let count = results.len();

        tracing::info!(
            query = %query,
            results = count,
            duration_ms,
            "Search completed"
        );

        Ok(SearchResponse {
            query: query.to_string(),
            results,
            count,
            duration_ms,
        })
    }

    /// Resolve the requested limit against the configured defaults
    ///
    /// `None` uses the default limit, non-positive values resolve to 0 and
    /// anything above the maximum is clamped.
    pub fn effective_limit(&self, limit: Option<i64>) -> usize {
        match limit {
            None => self.default_limit.min(self.max_limit),
            Some(n) if n <= 0 => 0,
            Some(n) => usize::try_from(n)
                .unwrap_or(usize::MAX)
                .min(self.max_limit),
        }
    }
}
