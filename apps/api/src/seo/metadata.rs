//! Meta description candidates and SEO tag sets.

use crate::seo::templates::{
    KEYWORD_PLACEHOLDER, MAX_SEO_TAGS, META_MAX_CHARS, META_SNIPPET_CHARS,
    META_TEMPLATES_WITHOUT_KEYWORD, META_TEMPLATES_WITH_KEYWORD, SNIPPET_PLACEHOLDER,
};
use crate::seo::text::{strip_tags, truncate_chars};

/// Three candidates with a keyword, two without; each at most `META_MAX_CHARS`
/// characters.
pub fn generate_meta_descriptions(content: &str, keyword: &str) -> Vec<String> {
    let stripped = strip_tags(content);
    let snippet = truncate_chars(&stripped, META_SNIPPET_CHARS);

    let templates: &[&str] = if keyword.is_empty() {
        &META_TEMPLATES_WITHOUT_KEYWORD
    } else {
        &META_TEMPLATES_WITH_KEYWORD
    };

    templates
        .iter()
        .map(|template| {
            let description = template
                .replace(KEYWORD_PLACEHOLDER, keyword)
                .replace(SNIPPET_PLACEHOLDER, snippet);
            truncate_chars(&description, META_MAX_CHARS).to_string()
        })
        .collect()
}

/// Primary keyword first, then LSI keywords in order, skipping repeats, capped
/// at `MAX_SEO_TAGS`.
pub fn generate_seo_tags(keyword: &str, lsi_keywords: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(MAX_SEO_TAGS);
    let candidates = std::iter::once(keyword).chain(lsi_keywords.iter().map(String::as_str));

    for candidate in candidates {
        if tags.len() == MAX_SEO_TAGS {
            break;
        }
        if !tags.iter().any(|t| t == candidate) {
            tags.push(candidate.to_string());
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_three_candidates_with_keyword() {
        let descriptions = generate_meta_descriptions(
            "<p>This is test content about digital marketing strategies.</p>",
            "digital marketing",
        );
        assert_eq!(descriptions.len(), 3);
        assert!(descriptions[0].starts_with("Learn everything about digital marketing"));
        assert!(descriptions[0].contains("This is test content"));
        assert!(!descriptions[0].contains("<p>"));
    }

    #[test]
    fn test_two_candidates_without_keyword() {
        let descriptions = generate_meta_descriptions("Plain body", "");
        assert_eq!(
            descriptions,
            vec![
                "Plain body...".to_string(),
                "A complete guide covering every aspect. Plain body...".to_string()
            ]
        );
    }

    #[test]
    fn test_whitespace_keyword_still_uses_keyword_templates() {
        assert_eq!(generate_meta_descriptions("body", "  ").len(), 3);
    }

    #[test]
    fn test_never_longer_than_160_chars() {
        let long_content = "word ".repeat(500);
        let long_keyword = "k".repeat(300);
        for keyword in ["", "seo", long_keyword.as_str()] {
            for description in generate_meta_descriptions(&long_content, keyword) {
                assert!(description.chars().count() <= 160);
            }
        }
    }

    #[test]
    fn test_snippet_is_first_100_chars_of_text() {
        let content = format!("<div>{}</div>", "a".repeat(150));
        let descriptions = generate_meta_descriptions(&content, "");
        assert_eq!(descriptions[0], format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn test_meta_descriptions_deterministic() {
        assert_eq!(
            generate_meta_descriptions("body", "seo"),
            generate_meta_descriptions("body", "seo")
        );
    }

    #[test]
    fn test_tags_keyword_first_without_duplicates() {
        let tags = generate_seo_tags("seo", &strings(&["seo tools", "seo tips"]));
        assert_eq!(tags, strings(&["seo", "seo tools", "seo tips"]));
    }

    #[test]
    fn test_tags_skip_repeat_of_primary() {
        let tags = generate_seo_tags("seo", &strings(&["seo", "seo tips", "seo tips"]));
        assert_eq!(tags, strings(&["seo", "seo tips"]));
    }

    #[test]
    fn test_tags_capped_at_ten() {
        let lsi: Vec<String> = (0..20).map(|i| format!("tag {i}")).collect();
        let tags = generate_seo_tags("primary", &lsi);
        assert_eq!(tags.len(), 10);
        assert_eq!(tags[0], "primary");
        assert_eq!(tags[9], "tag 8");
    }
}
