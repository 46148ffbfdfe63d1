//! JSON-LD `Article` structured data.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::seo::templates::{
    SCHEMA_ARTICLE_TYPE, SCHEMA_AUTHOR_NAME, SCHEMA_AUTHOR_TYPE, SCHEMA_CONTEXT,
    SCHEMA_DESCRIPTION_CHARS,
};
use crate::seo::text::{strip_tags, truncate_chars, word_count};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaAuthor {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaMarkup {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub headline: String,
    pub description: String,
    pub author: SchemaAuthor,
    pub date_published: String,
    pub date_modified: String,
    pub word_count: usize,
    pub article_body: String,
}

pub fn generate_schema(title: &str, content: &str, meta_description: &str) -> SchemaMarkup {
    generate_schema_at(title, content, meta_description, Utc::now())
}

/// Same as `generate_schema` with an explicit timestamp.
pub fn generate_schema_at(
    title: &str,
    content: &str,
    meta_description: &str,
    now: DateTime<Utc>,
) -> SchemaMarkup {
    let body = strip_tags(content);
    let description = if meta_description.is_empty() {
        truncate_chars(&body, SCHEMA_DESCRIPTION_CHARS).to_string()
    } else {
        meta_description.to_string()
    };
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    SchemaMarkup {
        context: SCHEMA_CONTEXT.to_string(),
        kind: SCHEMA_ARTICLE_TYPE.to_string(),
        headline: title.to_string(),
        description,
        author: SchemaAuthor {
            kind: SCHEMA_AUTHOR_TYPE.to_string(),
            name: SCHEMA_AUTHOR_NAME.to_string(),
        },
        date_published: timestamp.clone(),
        date_modified: timestamp,
        word_count: word_count(content),
        article_body: body,
    }
}
