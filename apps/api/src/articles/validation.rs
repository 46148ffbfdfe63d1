//! Request validation for article and SEO endpoints.
//!
//! Engine functions never validate their inputs; handlers call these first.

use crate::errors::AppError;

pub const TITLE_MAX_CHARS: usize = 255;
pub const TOPIC_MAX_CHARS: usize = 255;
pub const META_DESCRIPTION_MAX_CHARS: usize = 160;
pub const SEO_SCORE_MAX: i32 = 100;

pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_max_chars(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{field} must not exceed {max} characters"
        )));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), AppError> {
    require_non_blank("title", title)?;
    require_max_chars("title", title, TITLE_MAX_CHARS)
}

pub fn validate_topic(topic: &str) -> Result<(), AppError> {
    require_non_blank("topic", topic)?;
    require_max_chars("topic", topic, TOPIC_MAX_CHARS)
}

pub fn validate_meta_description(meta_description: Option<&str>) -> Result<(), AppError> {
    match meta_description {
        Some(meta) => require_max_chars("meta_description", meta, META_DESCRIPTION_MAX_CHARS),
        None => Ok(()),
    }
}

pub fn validate_seo_score(score: Option<i32>) -> Result<(), AppError> {
    match score {
        Some(s) if !(0..=SEO_SCORE_MAX).contains(&s) => Err(AppError::Validation(format!(
            "seo_score must be between 0 and {SEO_SCORE_MAX}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_required() {
        assert!(matches!(validate_title("   "), Err(AppError::Validation(_))));
        assert!(validate_title("Test Article").is_ok());
    }

    #[test]
    fn test_title_max_length() {
        assert!(validate_title(&"a".repeat(255)).is_ok());
        assert!(validate_title(&"a".repeat(256)).is_err());
    }

    #[test]
    fn test_topic_rules() {
        assert!(validate_topic("").is_err());
        assert!(validate_topic(&"t".repeat(256)).is_err());
        assert!(validate_topic("digital marketing").is_ok());
    }

    #[test]
    fn test_meta_description_limit() {
        assert!(validate_meta_description(None).is_ok());
        assert!(validate_meta_description(Some(&"m".repeat(160))).is_ok());
        assert!(validate_meta_description(Some(&"m".repeat(161))).is_err());
    }

    #[test]
    fn test_seo_score_bounds() {
        assert!(validate_seo_score(None).is_ok());
        assert!(validate_seo_score(Some(0)).is_ok());
        assert!(validate_seo_score(Some(100)).is_ok());
        assert!(validate_seo_score(Some(-1)).is_err());
        assert!(validate_seo_score(Some(101)).is_err());
    }
}
