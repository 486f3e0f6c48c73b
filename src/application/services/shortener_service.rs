//! Mapping creation and slug resolution service.

use std::sync::Arc;

use tracing::{error, warn};
use validator::ValidationErrors;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{MappingStore, StoreError};
use crate::domain::validation::MappingInput;
use crate::utils::slug_generator::generate_slug;

/// Failure modes of [`ShortenerService::create_mapping`].
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),

    /// The slug (supplied or generated) already belongs to another mapping.
    #[error("Slug '{slug}' is already in use")]
    SlugInUse { slug: String },

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ShortenError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::SlugTaken { slug } => Self::SlugInUse { slug },
            other => Self::Store(other),
        }
    }
}

/// Outcome of resolving a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Redirect to the stored target URL.
    Redirect(String),
    NotFound(Miss),
}

/// Why a slug could not be resolved. Both variants carry the slug as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Miss {
    /// No mapping with this slug exists.
    Unknown(String),
    /// The store failed during lookup.
    LookupFailed(String),
}

impl Miss {
    pub fn slug(&self) -> &str {
        match self {
            Miss::Unknown(slug) | Miss::LookupFailed(slug) => slug,
        }
    }

    /// Message shown to the user on the home page.
    pub fn message(&self) -> String {
        match self {
            Miss::Unknown(slug) => format!("{} not found", slug),
            Miss::LookupFailed(_) => "Link not found".to_string(),
        }
    }
}

/// Service for creating and resolving short URL mappings.
///
/// Stateless: every call goes straight to the injected store. Slug uniqueness
/// is left entirely to [`MappingStore::insert`]; there is no pre-check and no
/// retry.
pub struct ShortenerService {
    store: Arc<dyn MappingStore>,
}

impl ShortenerService {
    /// Creates a new shortener service on top of a mapping store.
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Creates a mapping from a raw slug and URL.
    ///
    /// Both values are trimmed; an empty slug counts as absent and gets
    /// replaced by a generated one. Supplied slugs are lowercased.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::Invalid`] if validation fails (nothing is written)
    /// - [`ShortenError::SlugInUse`] if the store already holds the slug
    /// - [`ShortenError::Store`] on any other storage failure
    pub async fn create_mapping(
        &self,
        raw_slug: Option<String>,
        raw_url: Option<String>,
    ) -> Result<UrlMapping, ShortenError> {
        let input = MappingInput::new(raw_slug, raw_url).into_valid()?;

        let slug = match input.slug {
            Some(slug) => slug.to_lowercase(),
            None => generate_slug(),
        };

        let new_mapping = NewUrlMapping {
            slug,
            target: input.target,
        };

        self.store.insert(new_mapping).await.map_err(|e| {
            if let StoreError::Database(db) = &e {
                error!("Failed to insert mapping: {}", db);
            }
            ShortenError::from(e)
        })
    }

    /// Resolves a slug to its redirect target.
    ///
    /// The lookup key is lowercased, matching the normalization applied on
    /// create. Store failures are logged and reported as a miss.
    pub async fn resolve_slug(&self, slug: &str) -> Resolution {
        match self.store.find_by_slug(&slug.to_lowercase()).await {
            Ok(Some(mapping)) => Resolution::Redirect(mapping.target),
            Ok(None) => Resolution::NotFound(Miss::Unknown(slug.to_string())),
            Err(e) => {
                warn!("Lookup of slug '{}' failed: {}", slug, e);
                Resolution::NotFound(Miss::LookupFailed(slug.to_string()))
            }
        }
    }

    /// Checks connectivity of the underlying store.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
