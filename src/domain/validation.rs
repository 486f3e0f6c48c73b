//! Declarative validation schema for mapping creation input.
//!
//! All rules live on [`MappingInput`] and are checked in one pass before the
//! store is touched, so a rejected request never writes anything.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use url::Url;
use validator::{Validate, ValidationError, ValidationErrors};

/// Slugs are ASCII word characters and hyphens, nothing else.
static SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// URL schemes accepted as redirect targets.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Raw create request after trimming, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
#[validate(schema(function = usable_target))]
pub struct MappingInput {
    #[validate(regex(
        path = *SLUG_PATTERN,
        message = "slug may only contain letters, digits, underscores and hyphens"
    ))]
    pub slug: Option<String>,

    #[validate(
        required(message = "url is a required field"),
        url(message = "url must be a valid URL")
    )]
    pub url: Option<String>,
}

/// Input that passed [`MappingInput`] validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInput {
    pub slug: Option<String>,
    pub target: String,
}

impl MappingInput {
    /// Trims both fields. Blank values count as absent.
    pub fn new(slug: Option<String>, url: Option<String>) -> Self {
        Self {
            slug: non_blank(slug),
            url: non_blank(url),
        }
    }

    /// Validates the input and returns the checked fields.
    ///
    /// # Errors
    ///
    /// Returns the collected [`ValidationErrors`] if the URL is missing,
    /// malformed or uses an unsupported scheme, or if the slug contains
    /// characters outside `[A-Za-z0-9_-]`.
    pub fn into_valid(self) -> Result<ValidInput, ValidationErrors> {
        self.validate()?;

        let Some(target) = self.url else {
            let mut errors = ValidationErrors::new();
            errors.add("url", ValidationError::new("required"));
            return Err(errors);
        };

        Ok(ValidInput {
            slug: self.slug,
            target,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Struct-level rule, run only once the field rules pass.
///
/// URL parsing drops embedded tabs and newlines, but the target is stored as
/// submitted and must later fit in a `Location` header.
fn usable_target(input: &MappingInput) -> Result<(), ValidationError> {
    let Some(ref value) = input.url else {
        return Ok(());
    };

    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::new("whitespace")
            .with_message(Cow::from("url must not contain whitespace or control characters")));
    }

    let scheme_ok = Url::parse(value)
        .map(|url| ALLOWED_SCHEMES.contains(&url.scheme()))
        .unwrap_or(false);

    if scheme_ok {
        Ok(())
    } else {
        Err(ValidationError::new("scheme")
            .with_message(Cow::from("url must use the http, https or ftp scheme")))
    }
}
