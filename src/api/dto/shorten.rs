//! DTOs for the mapping creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlMapping;

/// Message returned when the requested slug is taken.
pub const SLUG_IN_USE_MESSAGE: &str = "Slug in use.";

/// Request to create a mapping.
///
/// Both fields are optional at the wire level; the service decides what is
/// missing. `"slug": ""` and `"slug": null` mean "generate one".
#[derive(Debug, Default, Deserialize)]
pub struct CreateUrlRequest {
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

/// The created mapping, echoed back to the client.
#[derive(Debug, Serialize)]
pub struct MappingResponse {
    pub slug: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<UrlMapping> for MappingResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            slug: mapping.slug,
            url: mapping.target,
            created_at: mapping.created_at,
        }
    }
}

/// Plain message response used for handled, non-error outcomes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn slug_in_use() -> Self {
        Self {
            message: SLUG_IN_USE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_fields_default_to_none() {
        let request: CreateUrlRequest = serde_json::from_str("{}").unwrap();

        assert!(request.slug.is_none());
        assert!(request.url.is_none());
    }

    #[test]
    fn test_request_null_slug() {
        let request: CreateUrlRequest =
            serde_json::from_str(r#"{"slug": null, "url": "https://example.com"}"#).unwrap();

        assert!(request.slug.is_none());
        assert_eq!(request.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_response_uses_url_key() {
        let mapping = UrlMapping::new(
            "ex1".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
        );

        let json = serde_json::to_value(MappingResponse::from(mapping)).unwrap();

        assert_eq!(json["slug"], "ex1");
        assert_eq!(json["url"], "https://example.com");
        assert!(json["created_at"].is_string());
    }
}
