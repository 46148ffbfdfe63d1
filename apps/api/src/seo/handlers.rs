//! Axum route handlers for the SEO content engine.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::articles::repository::{get_owned_article, replace_keywords};
use crate::articles::validation::{require_non_blank, validate_topic};
use crate::errors::AppError;
use crate::seo::analysis::{analyze_seo, SeoAnalysis};
use crate::seo::keywords::KeywordIdea;
use crate::seo::metadata::{generate_meta_descriptions, generate_seo_tags};
use crate::seo::outline::{generate_outline, render_outline_html, OutlineNode};
use crate::seo::schema::{generate_schema, SchemaMarkup};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub topic: String,
    pub article_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub topic: String,
    pub article_id: Option<Uuid>,
    pub keywords: Vec<KeywordIdea>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordRequest {
    pub keyword: String,
}

#[derive(Debug, Serialize)]
pub struct LsiResponse {
    pub lsi_keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct OutlineResponse {
    pub outline: Vec<OutlineNode>,
    /// Outline rendered as starter HTML for the editor.
    pub draft_html: String,
}

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    pub content: String,
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Serialize)]
pub struct MetaDescriptionsResponse {
    pub descriptions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TagsRequest {
    pub keyword: String,
    #[serde(default)]
    pub lsi_keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SchemaRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub meta_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/seo/keywords
///
/// Generates keyword ideas for a topic. With `article_id`, the article's keyword
/// records are replaced by the new batch.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    validate_topic(&request.topic)?;
    let topic = request.topic.trim();

    let article = match request.article_id {
        Some(article_id) => {
            let user_id = request.user_id.ok_or_else(|| {
                AppError::Validation("user_id is required when article_id is set".to_string())
            })?;
            Some(get_owned_article(&state.db, article_id, user_id).await?)
        }
        None => None,
    };

    let keywords = state.keyword_research.keyword_ideas(topic).await?;

    if let Some(article) = &article {
        replace_keywords(&state.db, article.id, &keywords).await?;
    }
    info!("Generated {} keyword ideas for '{topic}'", keywords.len());

    Ok(Json(KeywordsResponse {
        topic: topic.to_string(),
        article_id: article.map(|a| a.id),
        keywords,
    }))
}

/// POST /api/v1/seo/lsi
pub async fn handle_lsi(
    State(state): State<AppState>,
    Json(request): Json<KeywordRequest>,
) -> Result<Json<LsiResponse>, AppError> {
    require_non_blank("keyword", &request.keyword)?;
    let lsi_keywords = state.keyword_research.lsi_keywords(&request.keyword).await?;
    Ok(Json(LsiResponse { lsi_keywords }))
}

/// POST /api/v1/seo/outline
pub async fn handle_outline(
    Json(request): Json<KeywordRequest>,
) -> Result<Json<OutlineResponse>, AppError> {
    require_non_blank("keyword", &request.keyword)?;
    let outline = generate_outline(request.keyword.trim());
    let draft_html = render_outline_html(&outline);
    Ok(Json(OutlineResponse {
        outline,
        draft_html,
    }))
}

/// POST /api/v1/seo/analyze
///
/// Surrounding whitespace is dropped from `keyword`; a blank keyword skips density.
pub async fn handle_analyze(Json(request): Json<ContentRequest>) -> Json<SeoAnalysis> {
    Json(analyze_seo(&request.content, request.keyword.trim()))
}

/// POST /api/v1/seo/meta-descriptions
pub async fn handle_meta_descriptions(
    Json(request): Json<ContentRequest>,
) -> Json<MetaDescriptionsResponse> {
    Json(MetaDescriptionsResponse {
        descriptions: generate_meta_descriptions(&request.content, request.keyword.trim()),
    })
}

/// POST /api/v1/seo/tags
pub async fn handle_tags(Json(request): Json<TagsRequest>) -> Result<Json<TagsResponse>, AppError> {
    require_non_blank("keyword", &request.keyword)?;
    Ok(Json(TagsResponse {
        tags: generate_seo_tags(request.keyword.trim(), &request.lsi_keywords),
    }))
}

/// POST /api/v1/seo/schema
pub async fn handle_schema(
    Json(request): Json<SchemaRequest>,
) -> Result<Json<SchemaMarkup>, AppError> {
    require_non_blank("title", &request.title)?;
    Ok(Json(generate_schema(
        &request.title,
        &request.content,
        &request.meta_description,
    )))
}
