//! Error types for dogapi operations

use thiserror::Error;

/// The source has no knowledge of the requested breed.
///
/// This is the only failure a [`BreedFetcher`](crate::BreedFetcher) reports.
/// It carries the name exactly as the caller passed it.
#[derive(Debug, Clone, Error, PartialEq, Eq, Hash)]
#[error("Breed not found: {breed}")]
pub struct BreedNotFound {
    pub breed: String,
}

impl BreedNotFound {
    pub fn new(breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
        }
    }
}

/// Errors raised while loading or validating a [`BreedCatalog`](crate::BreedCatalog).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Failed to parse breed catalog: {reason}")]
    Parse { reason: String },

    #[error("Invalid value for {field}: {value:?} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Sub-breed {sub_breed} listed more than once for breed {breed}")]
    DuplicateSubBreed { breed: String, sub_breed: String },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for breed lookups.
pub type BreedResult<T> = Result<T, BreedNotFound>;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// TESTS
// =============================================================================
