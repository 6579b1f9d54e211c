//! Shared application state for axum handlers.

use std::sync::Arc;

use geotrack_app::ports::LocationRepository;
use geotrack_app::services::ingest_service::IngestService;
use geotrack_app::services::query_service::QueryService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Ingestion use-case.
    pub ingest_service: Arc<IngestService<R>>,
    /// Read-only queries.
    pub query_service: Arc<QueryService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            ingest_service: Arc::clone(&self.ingest_service),
            query_service: Arc::clone(&self.query_service),
        }
    }
}

impl<R> AppState<R>
where
    R: LocationRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(ingest_service: IngestService<R>, query_service: QueryService<R>) -> Self {
        Self {
            ingest_service: Arc::new(ingest_service),
            query_service: Arc::new(query_service),
        }
    }
}
