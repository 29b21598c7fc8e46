use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::images::ImageLookupCache;
use crate::llm_client::LlmClient;
use crate::style::StylePredictor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation log. Write-only from the service's point of view.
    pub db: SqlitePool,
    /// `None` when no Gemini key is configured; suggestions then fail fast.
    pub llm: Option<LlmClient>,
    /// Process-lifetime image pools, one instance per process.
    pub images: Arc<ImageLookupCache>,
    /// Pluggable style predictor. Default: RulePredictor. Swap via STYLE_BACKEND.
    pub style_predictor: Arc<dyn StylePredictor>,
    pub config: Config,
}
