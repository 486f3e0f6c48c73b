//! Helpers for classifying database errors.

/// Name of the unique constraint on `url_mappings.slug`.
pub const SLUG_UNIQUE_CONSTRAINT: &str = "url_mappings_slug_key";

/// Returns true if the error is a unique violation of the slug constraint.
pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SLUG_UNIQUE_CONSTRAINT))
}
