use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};
use validator::{Validate, ValidationError};

use crate::constants::{
    DEFAULT_GENERATE_COUNT, FALLBACK_THEME, MAX_GENERATE_COUNT, MAX_THEME_CHARS, MIN_GENERATE_COUNT,
};

// "1. ", "2、 ", "- ", "* " prefixes. A marker only counts when whitespace
// follows it, so "1.5倍" or "-5度" stay intact.
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:\d+[.、)）]|[-*•·])\s+").expect("list marker pattern is valid")
});

fn default_count() -> usize {
    DEFAULT_GENERATE_COUNT
}

fn validate_theme(theme: &str) -> Result<(), ValidationError> {
    if theme.trim().chars().count() > MAX_THEME_CHARS {
        return Err(ValidationError::new("theme_too_long"));
    }
    Ok(())
}

/// Body of `POST /api/prizes/generate`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct GeneratePrizesRequest {
    #[serde(default)]
    #[validate(custom = "validate_theme")]
    pub theme: String,
    #[serde(default = "default_count")]
    #[validate(range(min = 2, max = 12))]
    pub count: usize,
}

impl GeneratePrizesRequest {
    pub fn new(theme: impl Into<String>, count: usize) -> Self {
        Self {
            theme: theme.into(),
            count,
        }
    }

    /// Theme sent to the model; blank input falls back to a generic theme.
    pub fn effective_theme(&self) -> &str {
        let theme = self.theme.trim();
        if theme.is_empty() {
            FALLBACK_THEME
        } else {
            theme
        }
    }

    pub fn clamped_count(&self) -> usize {
        self.count.clamp(MIN_GENERATE_COUNT, MAX_GENERATE_COUNT)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeneratePrizesResponse {
    pub prizes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Cleans up model output: trims, strips list markers, drops blanks and
/// keeps at most `count` entries.
pub fn normalize_generated_texts<I, S>(texts: I, count: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|t| LIST_MARKER.replace(t.as_ref(), "").trim().to_string())
        .filter(|t| !t.is_empty())
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: GeneratePrizesRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.count, 8);
        assert_eq!(request.effective_theme(), "有趣的主题");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_validation() {
        assert!(GeneratePrizesRequest::new("今晚吃什么", 8).validate().is_ok());
        assert!(GeneratePrizesRequest::new("今晚吃什么", 1).validate().is_err());
        assert!(GeneratePrizesRequest::new("今晚吃什么", 13).validate().is_err());

        let long_theme = "长".repeat(51);
        let errors = GeneratePrizesRequest::new(long_theme, 8).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("theme"));
    }

    #[test]
    fn test_normalize_generated_texts() {
        let raw = vec!["1. 火锅", "2、 烧烤", "- 寿司", "   ", "* 拉面", "麻辣烫"];
        assert_eq!(
            normalize_generated_texts(raw.clone(), 8),
            vec!["火锅", "烧烤", "寿司", "拉面", "麻辣烫"]
        );
        assert_eq!(normalize_generated_texts(raw, 2), vec!["火锅", "烧烤"]);
    }

    #[test]
    fn test_normalize_keeps_inner_numbers() {
        assert_eq!(normalize_generated_texts(["跑步5公里"], 8), vec!["跑步5公里"]);
    }

    #[test]
    fn test_normalize_keeps_leading_numbers_without_space() {
        let raw = ["1.5倍工资", "10:00起床", "-5度冰浴", "3)"];
        assert_eq!(
            normalize_generated_texts(raw, 8),
            vec!["1.5倍工资", "10:00起床", "-5度冰浴", "3)"]
        );
    }
}
