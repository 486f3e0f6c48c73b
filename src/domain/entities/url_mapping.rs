//! URL mapping entity: a slug and the address it redirects to.

use chrono::{DateTime, Utc};

/// A persisted association between a slug and its target URL.
///
/// Mappings are created once and never updated or deleted. The slug is
/// always stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub slug: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(slug: String, target: String, created_at: DateTime<Utc>) -> Self {
        Self {
            slug,
            target,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub slug: String,
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let now = Utc::now();
        let mapping = UrlMapping::new(
            "ex1".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(mapping.slug, "ex1");
        assert_eq!(mapping.target, "https://example.com");
        assert_eq!(mapping.created_at, now);
    }
}
