//! Owner-scoped persistence for articles and their keyword records.

use std::future::Future;

use serde_json::Value;
use sqlx::PgPool;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::articles::slug::{slugify, with_suffix};
use crate::errors::AppError;
use crate::models::article::{ArticleRow, ArticleStatus};
use crate::models::keyword::KeywordRow;
use crate::seo::keywords::KeywordIdea;

/// Parameters for inserting a new article.
pub struct NewArticle<'a> {
    pub user_id: Uuid,
    pub title: &'a str,
    pub topic: Option<&'a str>,
    pub keywords: Option<&'a Value>,
    pub outline: Option<&'a Value>,
    pub content: Option<&'a str>,
    pub meta_description: Option<&'a str>,
    pub seo_tags: Option<&'a Value>,
    pub schema_markup: Option<&'a Value>,
    pub status: ArticleStatus,
}

/// Returns the user's articles, newest first.
pub async fn list_articles(pool: &PgPool, user_id: Uuid) -> Result<Vec<ArticleRow>, AppError> {
    Ok(sqlx::query_as::<_, ArticleRow>(
        "SELECT * FROM articles WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Loads an article and checks that `user_id` owns it.
pub async fn get_owned_article(
    pool: &PgPool,
    article_id: Uuid,
    user_id: Uuid,
) -> Result<ArticleRow, AppError> {
    let article = sqlx::query_as::<_, ArticleRow>("SELECT * FROM articles WHERE id = $1")
        .bind(article_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Article {article_id} not found")))?;

    ensure_owner(&article, user_id)?;
    Ok(article)
}

pub fn ensure_owner(article: &ArticleRow, user_id: Uuid) -> Result<(), AppError> {
    if article.user_id != user_id {
        warn!("User {user_id} denied access to article {}", article.id);
        return Err(AppError::Forbidden);
    }
    Ok(())
}

/// Gives up with `Conflict` after this many taken slug candidates.
const MAX_SLUG_ATTEMPTS: u32 = 50;

/// Inserts the article under the first free slug derived from its title:
/// `base`, `base-2`, `base-3`, ...
pub async fn insert_article(pool: &PgPool, new: NewArticle<'_>) -> Result<ArticleRow, AppError> {
    let article = claim_slug(&slugify(new.title), MAX_SLUG_ATTEMPTS, |slug| {
        insert_with_slug(pool, &new, slug)
    })
    .await?;

    info!(
        "Created article {} ({}) for user {}",
        article.id, article.slug, article.user_id
    );
    Ok(article)
}

/// Tries slug candidates in order until `try_insert` claims one (`Some`).
/// A `None` means the candidate was taken at insert time.
async fn claim_slug<T, F, Fut>(
    base: &str,
    max_attempts: u32,
    mut try_insert: F,
) -> Result<T, AppError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Option<T>, AppError>>,
{
    for attempt in 1..=max_attempts {
        let candidate = with_suffix(base, attempt);
        if let Some(inserted) = try_insert(candidate.clone()).await? {
            return Ok(inserted);
        }
        debug!("Slug '{candidate}' taken, trying next suffix");
    }
    warn!("No free slug for '{base}' after {max_attempts} attempts");
    Err(AppError::Conflict(format!(
        "Could not allocate a unique slug for '{base}'"
    )))
}

/// Single INSERT; `None` when the slug is already taken.
async fn insert_with_slug(
    pool: &PgPool,
    new: &NewArticle<'_>,
    slug: String,
) -> Result<Option<ArticleRow>, AppError> {
    Ok(sqlx::query_as::<_, ArticleRow>(
        r#"
        INSERT INTO articles
            (id, user_id, title, slug, topic, keywords, outline, content,
             meta_description, seo_tags, schema_markup, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        ON CONFLICT (slug) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new.user_id)
    .bind(new.title)
    .bind(slug)
    .bind(new.topic)
    .bind(new.keywords)
    .bind(new.outline)
    .bind(new.content)
    .bind(new.meta_description)
    .bind(new.seo_tags)
    .bind(new.schema_markup)
    .bind(new.status.as_str())
    .fetch_optional(pool)
    .await?)
}

/// Writes every editable column of `article` back and bumps `updated_at`.
pub async fn update_article(pool: &PgPool, article: &ArticleRow) -> Result<ArticleRow, AppError> {
    let updated = sqlx::query_as::<_, ArticleRow>(
        r#"
        UPDATE articles
        SET title = $2, topic = $3, keywords = $4, outline = $5, content = $6,
            meta_description = $7, seo_tags = $8, schema_markup = $9, status = $10,
            seo_score = $11, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(article.id)
    .bind(&article.title)
    .bind(&article.topic)
    .bind(&article.keywords)
    .bind(&article.outline)
    .bind(&article.content)
    .bind(&article.meta_description)
    .bind(&article.seo_tags)
    .bind(&article.schema_markup)
    .bind(&article.status)
    .bind(article.seo_score)
    .fetch_one(pool)
    .await?;

    info!("Updated article {}", updated.id);
    Ok(updated)
}

/// Persists a freshly computed analysis and its score.
pub async fn save_analysis(
    pool: &PgPool,
    article_id: Uuid,
    analysis: &Value,
    score: i32,
) -> Result<ArticleRow, AppError> {
    let updated = sqlx::query_as::<_, ArticleRow>(
        r#"
        UPDATE articles
        SET seo_analysis = $2, seo_score = $3, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(article_id)
    .bind(analysis)
    .bind(score)
    .fetch_one(pool)
    .await?;

    info!("Stored SEO analysis for article {article_id} (score {score})");
    Ok(updated)
}

/// Deletes an article; keyword records cascade.
pub async fn delete_article(pool: &PgPool, article_id: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM articles WHERE id = $1")
        .bind(article_id)
        .execute(pool)
        .await?;
    info!("Deleted article {article_id}");
    Ok(())
}

pub async fn list_keywords(pool: &PgPool, article_id: Uuid) -> Result<Vec<KeywordRow>, AppError> {
    Ok(sqlx::query_as::<_, KeywordRow>(
        "SELECT * FROM keywords WHERE article_id = $1 ORDER BY position ASC",
    )
    .bind(article_id)
    .fetch_all(pool)
    .await?)
}

/// First keyword record the user marked as selected, if any.
pub async fn selected_keyword(pool: &PgPool, article_id: Uuid) -> Result<Option<String>, AppError> {
    Ok(sqlx::query_scalar::<_, String>(
        "SELECT keyword FROM keywords WHERE article_id = $1 AND is_selected ORDER BY position ASC LIMIT 1",
    )
    .bind(article_id)
    .fetch_optional(pool)
    .await?)
}

/// Replaces all keyword records of an article in a single transaction.
pub async fn replace_keywords(
    pool: &PgPool,
    article_id: Uuid,
    ideas: &[KeywordIdea],
) -> Result<Vec<KeywordRow>, AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM keywords WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut *tx)
        .await?;

    let mut rows = Vec::with_capacity(ideas.len());
    for (position, idea) in ideas.iter().enumerate() {
        let row = sqlx::query_as::<_, KeywordRow>(
            r#"
            INSERT INTO keywords
                (id, article_id, position, keyword, search_volume, competition,
                 content_type, lsi_keywords, is_completed, is_selected)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(article_id)
        .bind(position as i32)
        .bind(&idea.keyword)
        .bind(idea.search_volume)
        .bind(idea.competition.as_str())
        .bind(idea.content_type.as_str())
        .bind(&idea.lsi_keywords)
        .bind(idea.is_completed)
        .bind(idea.is_selected)
        .fetch_one(&mut *tx)
        .await?;
        rows.push(row);
    }

    tx.commit().await?;

    info!("Replaced keywords for article {article_id} ({} records)", rows.len());
    Ok(rows)
}
