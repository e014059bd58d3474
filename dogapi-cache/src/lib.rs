//! dogapi Cache - Memoizing Breed Fetcher
//!
//! [`CachingBreedFetcher`] sits in front of a slow or rate-limited
//! [`BreedFetcher`] and answers repeated lookups from memory.
//!
//! # Caching Rules
//!
//! - A successful lookup is cached forever; the first result wins
//! - A [`BreedNotFound`] is never cached, so the next lookup retries the source
//! - Every lookup that reaches the source increments [`CachingBreedFetcher::calls_made`]
//!
//! There is no eviction, expiry or size bound. Lookups take `&mut self`;
//! share an instance across threads by wrapping it in a `Mutex`.

mod caching;

pub use caching::CachingBreedFetcher;

pub use dogapi_core::{BreedFetcher, BreedNotFound, BreedResult};
