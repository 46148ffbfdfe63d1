use once_cell::sync::Lazy;
use regex::Regex;

const FALLBACK_SLUG: &str = "article";

static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid slug separator regex"));

/// Lowercases the title and collapses every run of non-alphanumerics into `-`.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let slug = SEPARATOR_RE.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// `attempt` 1 is the bare slug; later attempts append `-N`.
pub fn with_suffix(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(
            slugify("Digital Marketing: Guide for Beginners!"),
            "digital-marketing-guide-for-beginners"
        );
    }

    #[test]
    fn test_slugify_trims_separators() {
        assert_eq!(slugify("  --Hello   World--  "), "hello-world");
    }

    #[test]
    fn test_slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Café Crème 2024"), "café-crème-2024");
    }

    #[test]
    fn test_slugify_empty_falls_back() {
        assert_eq!(slugify("!!!"), "article");
    }

    #[test]
    fn test_with_suffix() {
        assert_eq!(with_suffix("seo", 1), "seo");
        assert_eq!(with_suffix("seo", 3), "seo-3");
    }
}
