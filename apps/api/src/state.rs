use std::sync::Arc;

use sqlx::PgPool;

use crate::seo::keywords::KeywordResearch;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable keyword research source. Default: SimulatedKeywordResearch.
    pub keyword_research: Arc<dyn KeywordResearch>,
}
