pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::articles::handlers as articles;
use crate::seo::handlers as seo;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Article API
        .route(
            "/api/v1/articles",
            get(articles::handle_list_articles).post(articles::handle_create_article),
        )
        .route(
            "/api/v1/articles/:id",
            get(articles::handle_get_article)
                .put(articles::handle_update_article)
                .delete(articles::handle_delete_article),
        )
        .route(
            "/api/v1/articles/:id/analyze",
            post(articles::handle_analyze_article),
        )
        // SEO engine
        .route("/api/v1/seo/keywords", post(seo::handle_keywords))
        .route("/api/v1/seo/lsi", post(seo::handle_lsi))
        .route("/api/v1/seo/outline", post(seo::handle_outline))
        .route("/api/v1/seo/analyze", post(seo::handle_analyze))
        .route(
            "/api/v1/seo/meta-descriptions",
            post(seo::handle_meta_descriptions),
        )
        .route("/api/v1/seo/tags", post(seo::handle_tags))
        .route("/api/v1/seo/schema", post(seo::handle_schema))
        .with_state(state)
}
