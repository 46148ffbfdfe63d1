//! Axum route handlers for owner-scoped article CRUD and stored analyses.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::articles::repository::{
    delete_article, get_owned_article, insert_article, list_articles, list_keywords,
    save_analysis, selected_keyword, update_article, NewArticle,
};
use crate::articles::validation::{validate_meta_description, validate_seo_score, validate_title};
use crate::errors::AppError;
use crate::models::article::{ArticleRow, ArticleStatus};
use crate::models::keyword::KeywordRow;
use crate::seo::analysis::{analyze_seo, SeoAnalysis};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub user_id: Uuid,
    pub title: String,
    pub topic: Option<String>,
    pub keywords: Option<Value>,
    pub outline: Option<Value>,
    pub content: Option<String>,
    pub meta_description: Option<String>,
    pub seo_tags: Option<Value>,
    pub schema_markup: Option<Value>,
    pub status: Option<ArticleStatus>,
}

/// Partial update: fields left out keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticleRequest {
    pub user_id: Uuid,
    pub title: Option<String>,
    pub topic: Option<String>,
    pub keywords: Option<Value>,
    pub outline: Option<Value>,
    pub content: Option<String>,
    pub meta_description: Option<String>,
    pub seo_tags: Option<Value>,
    pub schema_markup: Option<Value>,
    pub status: Option<ArticleStatus>,
    pub seo_score: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeArticleRequest {
    pub user_id: Uuid,
    pub keyword: Option<String>,
}

#[derive(Serialize)]
pub struct ArticleDetailResponse {
    pub article: ArticleRow,
    pub keywords: Vec<KeywordRow>,
}

#[derive(Serialize)]
pub struct ArticleAnalysisResponse {
    pub article_id: Uuid,
    pub keyword: Option<String>,
    pub analysis: SeoAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/articles
pub async fn handle_list_articles(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ArticleRow>>, AppError> {
    Ok(Json(list_articles(&state.db, params.user_id).await?))
}

/// POST /api/v1/articles
pub async fn handle_create_article(
    State(state): State<AppState>,
    Json(request): Json<CreateArticleRequest>,
) -> Result<(StatusCode, Json<ArticleRow>), AppError> {
    validate_title(&request.title)?;
    validate_meta_description(request.meta_description.as_deref())?;

    let article = insert_article(
        &state.db,
        NewArticle {
            user_id: request.user_id,
            title: request.title.trim(),
            topic: request.topic.as_deref(),
            keywords: request.keywords.as_ref(),
            outline: request.outline.as_ref(),
            content: request.content.as_deref(),
            meta_description: request.meta_description.as_deref(),
            seo_tags: request.seo_tags.as_ref(),
            schema_markup: request.schema_markup.as_ref(),
            status: request.status.unwrap_or_default(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(article)))
}

/// GET /api/v1/articles/:id
pub async fn handle_get_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ArticleDetailResponse>, AppError> {
    let article = get_owned_article(&state.db, id, params.user_id).await?;
    let keywords = list_keywords(&state.db, id).await?;
    Ok(Json(ArticleDetailResponse { article, keywords }))
}

/// PUT /api/v1/articles/:id
pub async fn handle_update_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateArticleRequest>,
) -> Result<Json<ArticleRow>, AppError> {
    if let Some(title) = &request.title {
        validate_title(title)?;
    }
    validate_meta_description(request.meta_description.as_deref())?;
    validate_seo_score(request.seo_score)?;

    let mut article = get_owned_article(&state.db, id, request.user_id).await?;
    apply_update(&mut article, request);
    Ok(Json(update_article(&state.db, &article).await?))
}

/// DELETE /api/v1/articles/:id
pub async fn handle_delete_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    get_owned_article(&state.db, id, params.user_id).await?;
    delete_article(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/articles/:id/analyze
///
/// Scores the stored content and persists the analysis. Focus keyword: the
/// request's, else the selected keyword record, else the article topic.
pub async fn handle_analyze_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AnalyzeArticleRequest>,
) -> Result<Json<ArticleAnalysisResponse>, AppError> {
    let article = get_owned_article(&state.db, id, request.user_id).await?;
    let selected = selected_keyword(&state.db, id).await?;

    let keyword = choose_focus_keyword(
        request.keyword.as_deref(),
        selected.as_deref(),
        article.topic.as_deref(),
    );
    let analysis = analyze_seo(
        article.content.as_deref().unwrap_or_default(),
        keyword.as_deref().unwrap_or_default(),
    );

    let analysis_json = serde_json::to_value(&analysis).map_err(anyhow::Error::from)?;
    save_analysis(&state.db, id, &analysis_json, analysis.score as i32).await?;

    Ok(Json(ArticleAnalysisResponse {
        article_id: id,
        keyword,
        analysis,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Overwrites the stored fields that the request carries.
fn apply_update(article: &mut ArticleRow, request: UpdateArticleRequest) {
    if let Some(title) = request.title {
        article.title = title.trim().to_string();
    }
    if let Some(topic) = request.topic {
        article.topic = Some(topic);
    }
    if let Some(keywords) = request.keywords {
        article.keywords = Some(keywords);
    }
    if let Some(outline) = request.outline {
        article.outline = Some(outline);
    }
    if let Some(content) = request.content {
        article.content = Some(content);
    }
    if let Some(meta_description) = request.meta_description {
        article.meta_description = Some(meta_description);
    }
    if let Some(seo_tags) = request.seo_tags {
        article.seo_tags = Some(seo_tags);
    }
    if let Some(schema_markup) = request.schema_markup {
        article.schema_markup = Some(schema_markup);
    }
    if let Some(status) = request.status {
        article.status = status.as_str().to_string();
    }
    if let Some(seo_score) = request.seo_score {
        article.seo_score = seo_score;
    }
}

/// First non-blank candidate, trimmed.
fn choose_focus_keyword(
    requested: Option<&str>,
    selected: Option<&str>,
    topic: Option<&str>,
) -> Option<String> {
    [requested, selected, topic]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|k| !k.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::repository::ensure_owner;
    use chrono::Utc;
    use serde_json::json;

    fn make_article(user_id: Uuid) -> ArticleRow {
        ArticleRow {
            id: Uuid::new_v4(),
            user_id,
            title: "Digital marketing guide".to_string(),
            slug: "digital-marketing-guide".to_string(),
            topic: Some("digital marketing".to_string()),
            keywords: None,
            outline: None,
            content: Some("<p>Draft</p>".to_string()),
            meta_description: None,
            seo_tags: None,
            schema_markup: None,
            seo_analysis: None,
            status: "draft".to_string(),
            seo_score: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_apply_update_only_touches_present_fields() {
        let user_id = Uuid::new_v4();
        let mut article = make_article(user_id);
        apply_update(
            &mut article,
            UpdateArticleRequest {
                user_id,
                title: Some("  Updated Title ".to_string()),
                status: Some(ArticleStatus::Published),
                seo_tags: Some(json!(["seo", "marketing"])),
                seo_score: Some(72),
                ..Default::default()
            },
        );

        assert_eq!(article.title, "Updated Title");
        assert_eq!(article.status, "published");
        assert_eq!(article.seo_tags, Some(json!(["seo", "marketing"])));
        assert_eq!(article.seo_score, 72);
        // untouched
        assert_eq!(article.slug, "digital-marketing-guide");
        assert_eq!(article.topic.as_deref(), Some("digital marketing"));
        assert_eq!(article.content.as_deref(), Some("<p>Draft</p>"));
    }

    #[test]
    fn test_owner_check() {
        let owner = Uuid::new_v4();
        let article = make_article(owner);
        assert!(ensure_owner(&article, owner).is_ok());
        assert!(matches!(
            ensure_owner(&article, Uuid::new_v4()),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_focus_keyword_precedence() {
        assert_eq!(
            choose_focus_keyword(Some("rust"), Some("seo"), Some("topic")),
            Some("rust".to_string())
        );
        assert_eq!(
            choose_focus_keyword(Some("  "), Some("seo"), Some("topic")),
            Some("seo".to_string())
        );
        assert_eq!(
            choose_focus_keyword(None, None, Some(" topic ")),
            Some("topic".to_string())
        );
        assert_eq!(choose_focus_keyword(None, None, None), None);
    }

    #[test]
    fn test_create_request_defaults() {
        let request: CreateArticleRequest = serde_json::from_value(json!({
            "user_id": Uuid::new_v4(),
            "title": "Test Article",
            "topic": "Test Topic"
        }))
        .unwrap();
        assert!(request.content.is_none());
        assert_eq!(request.status.unwrap_or_default(), ArticleStatus::Draft);
    }

    #[test]
    fn test_invalid_status_rejected() {
        let result: Result<CreateArticleRequest, _> = serde_json::from_value(json!({
            "user_id": Uuid::new_v4(),
            "title": "Test Article",
            "status": "deleted"
        }));
        assert!(result.is_err());
    }
}
