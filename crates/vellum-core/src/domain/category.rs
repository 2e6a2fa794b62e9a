use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Slugs are restricted to lowercase letters, digits, and hyphens.
static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[a-z0-9-]+$").unwrap());

/// Category entity. Post counts are not stored: they are computed on read by
/// scanning posts, so they can never drift out of sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub color: String,
}

/// Category plus its computed post count - the read-side shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub count: u64,
    pub color: String,
}

impl CategorySummary {
    pub fn new(category: Category, count: u64) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            count,
            color: category.color,
        }
    }
}

/// Normalize a raw slug: lowercase, every run of illegal characters replaced
/// with a single hyphen, leading/trailing hyphens trimmed.
pub fn normalize_slug(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut last_was_hyphen = false;

    for ch in raw.trim().to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    slug.trim_matches('-').to_string()
}

pub fn slug_is_valid(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug("Tutorials"), "tutorials");
        assert_eq!(normalize_slug("Web Development!"), "web-development");
        assert_eq!(normalize_slug("  UI/UX  Design "), "ui-ux-design");
        assert_eq!(normalize_slug("---"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["Tutorials", "Web Dev 2024", "a--b__c"] {
            let once = normalize_slug(raw);
            assert_eq!(normalize_slug(&once), once);
        }
    }

    #[test]
    fn test_slug_pattern() {
        assert!(slug_is_valid("web-development"));
        assert!(slug_is_valid("a1-b2"));
        assert!(!slug_is_valid(""));
        assert!(!slug_is_valid("Web"));
        assert!(!slug_is_valid("a_b"));
    }
}
