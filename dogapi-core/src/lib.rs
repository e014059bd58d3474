//! dogapi Core - Breed Fetcher Types
//!
//! The capability every breed source implements, the single error it may
//! report, and the static catalog used to describe breed data.

mod config;
mod error;
mod fetcher;

pub use config::BreedCatalog;
pub use error::{BreedNotFound, BreedResult, CatalogError, CatalogResult};
pub use fetcher::BreedFetcher;
