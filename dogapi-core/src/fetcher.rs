//! The breed fetcher capability.

use crate::BreedResult;

/// Source of sub-breed lists, keyed by breed name.
///
/// Implementations answer with the ordered sub-breeds of `breed`, or
/// [`BreedNotFound`](crate::BreedNotFound) when the name is unknown. Names are
/// opaque and case-sensitive; no normalization is applied.
///
/// # Implementation Requirements
///
/// - A given name either always succeeds with the same list or always fails,
///   for as long as a caller holds the fetcher
/// - The returned list is owned by the caller
pub trait BreedFetcher {
    /// Fetch the sub-breeds of `breed`.
    fn get_sub_breeds(&mut self, breed: &str) -> BreedResult<Vec<String>>;
}

impl<F: BreedFetcher + ?Sized> BreedFetcher for &mut F {
    fn get_sub_breeds(&mut self, breed: &str) -> BreedResult<Vec<String>> {
        (**self).get_sub_breeds(breed)
    }
}

impl<F: BreedFetcher + ?Sized> BreedFetcher for Box<F> {
    fn get_sub_breeds(&mut self, breed: &str) -> BreedResult<Vec<String>> {
        (**self).get_sub_breeds(breed)
    }
}
