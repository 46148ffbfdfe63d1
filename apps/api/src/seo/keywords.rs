//! Keyword research: synthesizes keyword ideas and LSI filler phrases for a topic.
//!
//! Default backend: `SimulatedKeywordResearch` (random market metadata, no network).
//! `AppState` holds an `Arc<dyn KeywordResearch>` so a real research API can be
//! swapped in without touching handlers.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::seo::templates::{
    KEYWORD_TEMPLATES, LSI_DRAWS, LSI_SUFFIXES, SEARCH_VOLUME_RANGE, TOPIC_PLACEHOLDER,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Competition {
    Low,
    Medium,
    High,
}

impl Competition {
    pub const ALL: [Competition; 3] = [Competition::Low, Competition::Medium, Competition::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Competition::Low => "low",
            Competition::Medium => "medium",
            Competition::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[serde(rename = "blog post")]
    BlogPost,
    Tutorial,
    Guide,
    List,
    Review,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::BlogPost,
        ContentType::Tutorial,
        ContentType::Guide,
        ContentType::List,
        ContentType::Review,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::BlogPost => "blog post",
            ContentType::Tutorial => "tutorial",
            ContentType::Guide => "guide",
            ContentType::List => "list",
            ContentType::Review => "review",
        }
    }
}

/// A candidate keyword phrase with simulated market metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordIdea {
    pub keyword: String,
    pub search_volume: i32, // 100..=10000
    pub competition: Competition,
    pub content_type: ContentType,
    pub lsi_keywords: Vec<String>,
    pub is_completed: bool,
    pub is_selected: bool,
}

/// Builds one idea per entry of `KEYWORD_TEMPLATES`, in table order.
pub fn generate_keywords<R: Rng>(topic: &str, rng: &mut R) -> Vec<KeywordIdea> {
    KEYWORD_TEMPLATES
        .iter()
        .map(|template| {
            let keyword = template.replace(TOPIC_PLACEHOLDER, topic);
            let search_volume = rng.gen_range(SEARCH_VOLUME_RANGE);
            let competition = Competition::ALL[rng.gen_range(0..Competition::ALL.len())];
            let content_type = ContentType::ALL[rng.gen_range(0..ContentType::ALL.len())];
            let lsi_keywords = generate_lsi_keywords(&keyword, &mut *rng);

            KeywordIdea {
                keyword,
                search_volume,
                competition,
                content_type,
                lsi_keywords,
                is_completed: false,
                is_selected: false,
            }
        })
        .collect()
}

/// Pairs the keyword's first token with `LSI_DRAWS` random suffixes, drawn with
/// replacement, then drops repeats. Callers must not assume `LSI_DRAWS` results.
pub fn generate_lsi_keywords<R: Rng>(keyword: &str, rng: &mut R) -> Vec<String> {
    let base = keyword.split_whitespace().next().unwrap_or("");
    let mut phrases: Vec<String> = Vec::with_capacity(LSI_DRAWS);

    for _ in 0..LSI_DRAWS {
        let suffix = LSI_SUFFIXES[rng.gen_range(0..LSI_SUFFIXES.len())];
        let phrase = format!("{base} {suffix}").trim().to_string();
        if !phrases.contains(&phrase) {
            phrases.push(phrase);
        }
    }

    phrases
}

/// Keyword research backend. Implement this to plug in a real research API.
#[async_trait]
pub trait KeywordResearch: Send + Sync {
    async fn keyword_ideas(&self, topic: &str) -> Result<Vec<KeywordIdea>, AppError>;

    async fn lsi_keywords(&self, keyword: &str) -> Result<Vec<String>, AppError>;
}

/// Simulated research backed by a shared `StdRng`.
pub struct SimulatedKeywordResearch {
    rng: Mutex<StdRng>,
}

impl SimulatedKeywordResearch {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence, for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, AppError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("keyword rng lock poisoned")))?;
        Ok(f(&mut *rng))
    }
}

#[async_trait]
impl KeywordResearch for SimulatedKeywordResearch {
    async fn keyword_ideas(&self, topic: &str) -> Result<Vec<KeywordIdea>, AppError> {
        self.with_rng(|rng| generate_keywords(topic, rng))
    }

    async fn lsi_keywords(&self, keyword: &str) -> Result<Vec<String>, AppError> {
        self.with_rng(|rng| generate_lsi_keywords(keyword, rng))
    }
}
