//! SEO content analyzer: scores HTML content against a fixed checklist.
//!
//! Each check is independent and awards a fixed number of points:
//!
//! | Check                     | Points | Pass condition                                  |
//! |---------------------------|--------|-------------------------------------------------|
//! | Content length            | 20     | >= 300 whitespace-delimited words               |
//! | Keyword density           | 20     | 1-3 % (only when the keyword is non-empty)      |
//! | Heading structure         | 15     | >= 3 `<h1>`..`<h6>` opening tags                |
//! | Image alt text            | 15     | no images, or every `<img>` has a non-empty alt |
//! | Links present             | 10     | >= 2 anchors with `href`                        |
//! | Meta description provided | 20     | always (the caller owns the meta description)   |

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::seo::text::{count_occurrences, word_count};

pub const CONTENT_LENGTH_LABEL: &str = "Content length (300+ words)";
pub const KEYWORD_DENSITY_LABEL: &str = "Keyword density (1-3%)";
pub const HEADING_STRUCTURE_LABEL: &str = "Proper heading structure";
pub const IMAGE_ALT_LABEL: &str = "Images have alt text";
pub const LINKS_LABEL: &str = "Contains links (2+)";
pub const META_DESCRIPTION_LABEL: &str = "Meta description provided";

const MIN_WORDS: usize = 300;
const KEYWORD_DENSITY_PERCENT: RangeInclusive<f64> = 1.0..=3.0;
const MIN_HEADINGS: usize = 3;
const MIN_LINKS: usize = 2;
const MAX_SCORE: u32 = 100;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h[1-6]\b").expect("valid heading regex"));
static IMG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img\b").expect("valid img regex"));
static IMG_WITH_ALT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img\b[^>]*\balt\s*=\s*("[^"]+"|'[^']+')[^>]*>"#)
        .expect("valid img alt regex")
});
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<a\s+[^>]*\bhref\s*=\s*["'][^"']*["'][^>]*>"#).expect("valid link regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub item: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoAnalysis {
    pub score: u32, // 0..=100
    pub checklist: Vec<ChecklistItem>,
}

#[derive(Default)]
struct Scorecard {
    score: u32,
    checklist: Vec<ChecklistItem>,
}

impl Scorecard {
    fn record(&mut self, label: &str, points: u32, passed: bool) {
        if passed {
            self.score += points;
        }
        self.checklist.push(ChecklistItem {
            item: label.to_string(),
            passed,
        });
    }

    fn finish(self) -> SeoAnalysis {
        SeoAnalysis {
            score: self.score.min(MAX_SCORE),
            checklist: self.checklist,
        }
    }
}

/// Scores `content` against the checklist. An empty `keyword` omits the density
/// entry; any other keyword is counted exactly as given.
pub fn analyze_seo(content: &str, keyword: &str) -> SeoAnalysis {
    let words = word_count(content);
    let mut card = Scorecard::default();

    card.record(CONTENT_LENGTH_LABEL, 20, words >= MIN_WORDS);

    if !keyword.is_empty() {
        let passed = keyword_density(content, keyword, words)
            .map(|density| KEYWORD_DENSITY_PERCENT.contains(&density))
            .unwrap_or(false);
        card.record(KEYWORD_DENSITY_LABEL, 20, passed);
    }

    card.record(
        HEADING_STRUCTURE_LABEL,
        15,
        HEADING_RE.find_iter(content).count() >= MIN_HEADINGS,
    );

    let total_images = IMG_RE.find_iter(content).count();
    let images_with_alt = IMG_WITH_ALT_RE.find_iter(content).count();
    card.record(
        IMAGE_ALT_LABEL,
        15,
        total_images == 0 || images_with_alt == total_images,
    );

    card.record(
        LINKS_LABEL,
        10,
        LINK_RE.find_iter(content).count() >= MIN_LINKS,
    );

    card.record(META_DESCRIPTION_LABEL, 20, true);

    card.finish()
}

/// Keyword occurrences per hundred words. `None` when there are no words.
pub fn keyword_density(content: &str, keyword: &str, words: usize) -> Option<f64> {
    if words == 0 {
        return None;
    }
    Some(count_occurrences(content, keyword) as f64 * 100.0 / words as f64)
}
