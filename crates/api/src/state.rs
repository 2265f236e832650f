use std::sync::Arc;

use grow_cloud::StorageProvider;
use grow_openai::Transcriber;
use grow_pipeline::TemplateSuggester;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Every collaborator is built in `main` (or by the test harness) and
/// injected here; handlers never construct clients themselves.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: grow_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Classify, load catalog, match and rank.
    pub suggester: TemplateSuggester,
    /// Speech-to-text model.
    pub transcriber: Arc<dyn Transcriber>,
    /// Recording archive. `None` when object storage is not configured.
    pub storage: Option<Arc<dyn StorageProvider>>,
}
