// Fixed phrasing tables for the content generators.
// Placeholders are substituted with `str::replace`; swap these tables to localize output.

use std::ops::RangeInclusive;

pub const TOPIC_PLACEHOLDER: &str = "{topic}";
pub const KEYWORD_PLACEHOLDER: &str = "{keyword}";
pub const CAPITALIZED_KEYWORD_PLACEHOLDER: &str = "{Keyword}";
pub const SNIPPET_PLACEHOLDER: &str = "{snippet}";

/// Keyword idea phrases, one idea per template, in output order.
pub const KEYWORD_TEMPLATES: [&str; 10] = [
    "how to {topic}",
    "{topic} tips",
    "{topic} guide",
    "{topic} tutorial",
    "learn {topic}",
    "best {topic}",
    "{topic} for beginners",
    "complete {topic}",
    "{topic} strategies",
    "{topic} techniques",
];

pub const SEARCH_VOLUME_RANGE: RangeInclusive<i32> = 100..=10_000;

pub const LSI_SUFFIXES: [&str; 10] = [
    "methods",
    "approach",
    "process",
    "system",
    "framework",
    "tools",
    "resources",
    "examples",
    "benefits",
    "advantages",
];

/// Draws per LSI call. Draws are with replacement, so results may be shorter.
pub const LSI_DRAWS: usize = 5;

pub const OUTLINE_INTRODUCTION: &str = "Introduction";
pub const OUTLINE_INTRO_PARAGRAPH: &str = "A short introduction to {keyword}";
pub const OUTLINE_SECTIONS: [&str; 5] = [
    "What Is {Keyword}?",
    "Benefits of {Keyword}",
    "Step-by-Step Guide",
    "Best Practices",
    "Common Mistakes to Avoid",
];
pub const OUTLINE_CONCLUSION: &str = "Conclusion";

pub const META_TEMPLATES_WITH_KEYWORD: [&str; 3] = [
    "Learn everything about {keyword} in this complete guide. {snippet}...",
    "Discover the best {keyword} techniques and strategies. {snippet}...",
    "Master {keyword} with our step-by-step guide. {snippet}...",
];
pub const META_TEMPLATES_WITHOUT_KEYWORD: [&str; 2] = [
    "{snippet}...",
    "A complete guide covering every aspect. {snippet}...",
];
pub const META_SNIPPET_CHARS: usize = 100;
pub const META_MAX_CHARS: usize = 160;

pub const MAX_SEO_TAGS: usize = 10;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const SCHEMA_ARTICLE_TYPE: &str = "Article";
pub const SCHEMA_AUTHOR_TYPE: &str = "Person";
pub const SCHEMA_AUTHOR_NAME: &str = "Author Name";
pub const SCHEMA_DESCRIPTION_CHARS: usize = 160;
