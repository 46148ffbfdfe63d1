use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct KeywordRow {
    pub id: Uuid,
    pub article_id: Uuid,
    /// Template order within the generated batch.
    pub position: i32,
    pub keyword: String,
    pub search_volume: i32,
    pub competition: String,
    pub content_type: Option<String>,
    pub lsi_keywords: Vec<String>,
    pub is_completed: bool,
    pub is_selected: bool,
    pub created_at: DateTime<Utc>,
}
