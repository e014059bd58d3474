//! Caching breed fetcher.
//!
//! Wraps any [`BreedFetcher`] and remembers every successful lookup, so each
//! breed reaches the wrapped source at most once. Failed lookups are never
//! remembered: asking again for an unknown breed asks the source again.

use std::collections::HashMap;

use dogapi_core::{BreedFetcher, BreedResult};

/// Breed fetcher that caches successful results of the wrapped source.
///
/// Every lookup that is not answered from the cache counts as one call to the
/// source, whether it succeeds or fails. See [`calls_made`](Self::calls_made).
///
/// Lists handed out are clones; callers may mutate them freely without
/// touching the cached copy.
///
/// # Example
///
/// ```ignore
/// let mut fetcher = CachingBreedFetcher::new(source);
///
/// let hounds = fetcher.get_sub_breeds("hound")?; // asks the source
/// let again = fetcher.get_sub_breeds("hound")?;  // served from the cache
///
/// assert_eq!(hounds, again);
/// assert_eq!(fetcher.calls_made(), 1);
/// ```
#[derive(Debug)]
pub struct CachingBreedFetcher<F> {
    /// The wrapped source.
    fetcher: F,
    /// Number of lookups delegated to the source.
    calls_made: u64,
    /// Breed name to sub-breeds, successful lookups only.
    breeds: HashMap<String, Vec<String>>,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Wrap `fetcher` with an empty cache.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            calls_made: 0,
            breeds: HashMap::new(),
        }
    }

    /// Get the sub-breeds of `breed`, consulting the source only on a miss.
    ///
    /// A [`BreedNotFound`](dogapi_core::BreedNotFound) from the source is
    /// returned unchanged and leaves the cache untouched.
    #[tracing::instrument(skip(self))]
    pub fn get_sub_breeds(&mut self, breed: &str) -> BreedResult<Vec<String>> {
        if let Some(sub_breeds) = self.breeds.get(breed) {
            tracing::debug!(sub_breeds = sub_breeds.len(), "Cache hit");
            return Ok(sub_breeds.clone());
        }

        self.calls_made += 1;
        tracing::debug!(calls_made = self.calls_made, "Cache miss, delegating to source");

        match self.fetcher.get_sub_breeds(breed) {
            Ok(sub_breeds) => {
                self.breeds.insert(breed.to_string(), sub_breeds.clone());
                tracing::debug!(
                    sub_breeds = sub_breeds.len(),
                    cached_breeds = self.breeds.len(),
                    "Cached sub-breeds"
                );
                Ok(sub_breeds)
            }
            Err(err) => {
                tracing::debug!(calls_made = self.calls_made, "Breed not found, not caching");
                Err(err)
            }
        }
    }

    /// Number of lookups delegated to the wrapped source since construction.
    pub fn calls_made(&self) -> u64 {
        self.calls_made
    }
}

impl<F> CachingBreedFetcher<F> {
    /// Whether `breed` has a cached result.
    pub fn is_cached(&self, breed: &str) -> bool {
        self.breeds.contains_key(breed)
    }

    /// Number of breeds with a cached result.
    pub fn cached_breeds(&self) -> usize {
        self.breeds.len()
    }

    /// Get a reference to the wrapped source.
    pub fn inner(&self) -> &F {
        &self.fetcher
    }

    /// Consume the cache and return the wrapped source.
    pub fn into_inner(self) -> F {
        self.fetcher
    }
}

impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    fn get_sub_breeds(&mut self, breed: &str) -> BreedResult<Vec<String>> {
        CachingBreedFetcher::get_sub_breeds(self, breed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dogapi_core::BreedNotFound;

    // Mock source for testing
    #[derive(Default)]
    struct MockBreedFetcher {
        breeds: HashMap<String, Vec<String>>,
        requests: Vec<String>,
    }

    impl MockBreedFetcher {
        fn with(mut self, breed: &str, sub_breeds: &[&str]) -> Self {
            self.breeds.insert(
                breed.to_string(),
                sub_breeds.iter().map(|s| s.to_string()).collect(),
            );
            self
        }
    }

    impl BreedFetcher for MockBreedFetcher {
        fn get_sub_breeds(&mut self, breed: &str) -> BreedResult<Vec<String>> {
            self.requests.push(breed.to_string());
            self.breeds
                .get(breed)
                .cloned()
                .ok_or_else(|| BreedNotFound::new(breed))
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_starts_empty() {
        let fetcher = CachingBreedFetcher::new(MockBreedFetcher::default());
        assert_eq!(fetcher.calls_made(), 0);
        assert_eq!(fetcher.cached_breeds(), 0);
    }

    #[test]
    fn test_cache_hit_skips_source() {
        let source = MockBreedFetcher::default().with("terrier", &["affenpinscher"]);
        let mut fetcher = CachingBreedFetcher::new(source);

        assert_eq!(
            fetcher.get_sub_breeds("terrier").unwrap(),
            strings(&["affenpinscher"])
        );
        assert_eq!(fetcher.calls_made(), 1);

        assert_eq!(
            fetcher.get_sub_breeds("terrier").unwrap(),
            strings(&["affenpinscher"])
        );
        assert_eq!(fetcher.calls_made(), 1);
        assert_eq!(fetcher.inner().requests, strings(&["terrier"]));
    }

    #[test]
    fn test_not_found_is_not_cached() {
        let mut fetcher = CachingBreedFetcher::new(MockBreedFetcher::default());

        let err = fetcher.get_sub_breeds("unicorn").unwrap_err();
        assert_eq!(err, BreedNotFound::new("unicorn"));
        assert_eq!(fetcher.calls_made(), 1);
        assert!(!fetcher.is_cached("unicorn"));

        let err = fetcher.get_sub_breeds("unicorn").unwrap_err();
        assert_eq!(err.breed, "unicorn");
        assert_eq!(fetcher.calls_made(), 2);
        assert_eq!(fetcher.cached_breeds(), 0);
    }

    #[test]
    fn test_empty_list_is_cached() {
        let source = MockBreedFetcher::default().with("husky", &[]);
        let mut fetcher = CachingBreedFetcher::new(source);

        assert!(fetcher.get_sub_breeds("husky").unwrap().is_empty());
        assert!(fetcher.is_cached("husky"));
        assert!(fetcher.get_sub_breeds("husky").unwrap().is_empty());
        assert_eq!(fetcher.calls_made(), 1);
    }

    #[test]
    fn test_returned_list_is_independent_of_cache() {
        let source = MockBreedFetcher::default().with("boxer", &["stock"]);
        let mut fetcher = CachingBreedFetcher::new(source);

        let mut first = fetcher.get_sub_breeds("boxer").unwrap();
        first.push("extra".to_string());

        let mut second = fetcher.get_sub_breeds("boxer").unwrap();
        assert_eq!(second, strings(&["stock"]));
        second.clear();

        assert_eq!(fetcher.get_sub_breeds("boxer").unwrap(), strings(&["stock"]));
        assert_eq!(fetcher.inner().breeds["boxer"], strings(&["stock"]));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let source = MockBreedFetcher::default().with("husky", &[]);
        let mut fetcher = CachingBreedFetcher::new(source);

        assert!(fetcher.get_sub_breeds("husky").is_ok());
        assert!(fetcher.get_sub_breeds("Husky").is_err());
        assert!(fetcher.get_sub_breeds("Husky").is_err());
        assert_eq!(fetcher.calls_made(), 3);
    }

    #[test]
    fn test_into_inner_returns_source() {
        let source = MockBreedFetcher::default().with("pug", &["frug"]);
        let mut fetcher = CachingBreedFetcher::new(source);
        fetcher.get_sub_breeds("pug").unwrap();
        fetcher.get_sub_breeds("pug").unwrap();

        let source = fetcher.into_inner();
        assert_eq!(source.requests, strings(&["pug"]));
    }

    #[test]
    fn test_stacked_caches_only_inner_reaches_source() {
        let source = MockBreedFetcher::default().with("pug", &["frug"]);
        let mut outer = CachingBreedFetcher::new(CachingBreedFetcher::new(source));

        outer.get_sub_breeds("pug").unwrap();
        outer.get_sub_breeds("pug").unwrap();
        let _ = outer.get_sub_breeds("corgi");

        assert_eq!(outer.calls_made(), 2);
        assert_eq!(outer.inner().calls_made(), 2);
        assert_eq!(outer.inner().inner().requests, strings(&["pug", "corgi"]));
    }

    #[test]
    fn test_wraps_boxed_trait_object() {
        let source: Box<dyn BreedFetcher> =
            Box::new(MockBreedFetcher::default().with("hound", &["afghan", "basset"]));
        let mut fetcher = CachingBreedFetcher::new(source);

        assert_eq!(
            fetcher.get_sub_breeds("hound").unwrap(),
            strings(&["afghan", "basset"])
        );
        assert_eq!(fetcher.calls_made(), 1);
    }
}
