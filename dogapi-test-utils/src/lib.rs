//! dogapi Test Utilities
//!
//! Shared test infrastructure for the dogapi workspace:
//! - An in-memory breed source that records every lookup
//! - Proptest generators for breed names, sub-breed lists and catalogs
//! - Fixtures for the common caching scenarios
//! - Custom assertions for breed lookups
//! - Tracing setup for tests

// Re-export core types for convenience
pub use dogapi_core::{
    BreedCatalog, BreedFetcher, BreedNotFound, BreedResult, CatalogError, CatalogResult,
};

use tracing_subscriber::EnvFilter;

// ============================================================================
// MOCK SOURCES
// ============================================================================

/// Breed source backed by a [`BreedCatalog`].
///
/// Records every lookup it receives, so tests can tell how often a wrapping
/// cache actually reached it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBreedFetcher {
    catalog: BreedCatalog,
    requests: Vec<String>,
}

impl InMemoryBreedFetcher {
    pub fn new(catalog: BreedCatalog) -> Self {
        Self {
            catalog,
            requests: Vec::new(),
        }
    }

    /// Add or replace a breed.
    pub fn with_breed<I, S>(mut self, breed: impl Into<String>, sub_breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_breed(breed, sub_breeds);
        self
    }

    /// Add or replace a breed in place.
    ///
    /// Lets a test change the source's answer after a cache has already
    /// seen it.
    pub fn set_breed<I, S>(&mut self, breed: impl Into<String>, sub_breeds: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog.insert(breed, sub_breeds);
    }

    /// The source's own data for `breed`.
    pub fn sub_breeds_of(&self, breed: &str) -> Option<&[String]> {
        self.catalog.get(breed)
    }

    /// Number of lookups received, successful or not.
    pub fn fetch_count(&self) -> usize {
        self.requests.len()
    }

    /// Every breed name requested, in order.
    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    pub fn catalog(&self) -> &BreedCatalog {
        &self.catalog
    }
}

impl BreedFetcher for InMemoryBreedFetcher {
    fn get_sub_breeds(&mut self, breed: &str) -> BreedResult<Vec<String>> {
        self.requests.push(breed.to_string());
        self.catalog
            .get(breed)
            .map(<[String]>::to_vec)
            .ok_or_else(|| BreedNotFound::new(breed))
    }
}

// ============================================================================
// TRACING
// ============================================================================

/// Install a fmt subscriber writing to the test harness.
///
/// Honours `RUST_LOG`, defaulting to `dogapi_cache=debug`. Safe to call from
/// every test; only the first call installs anything.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dogapi_cache=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for breed data.

    use super::*;
    use proptest::prelude::*;

    /// Generate a breed name. Mixed case, so case-sensitivity gets exercised.
    pub fn arb_breed_name() -> impl Strategy<Value = String> {
        "[A-Za-z]{1,10}"
    }

    /// Generate an ordered sub-breed list without repeats.
    pub fn arb_sub_breeds() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z]{1,10}", 0..6).prop_map(|mut names| {
            let mut seen = std::collections::HashSet::new();
            names.retain(|name| seen.insert(name.clone()));
            names
        })
    }

    /// Generate a valid catalog.
    pub fn arb_catalog() -> impl Strategy<Value = BreedCatalog> {
        prop::collection::btree_map(arb_breed_name(), arb_sub_breeds(), 0..8)
            .prop_map(|breeds| breeds.into_iter().collect())
    }

    /// Generate a catalog together with a sequence of lookups.
    ///
    /// Roughly half the lookups name a breed from the catalog; the rest are
    /// arbitrary names that are usually unknown to it.
    pub fn arb_catalog_with_lookups() -> impl Strategy<Value = (BreedCatalog, Vec<String>)> {
        arb_catalog().prop_flat_map(|catalog| {
            let known: Vec<String> = catalog.breeds().map(str::to_string).collect();
            let lookup = if known.is_empty() {
                arb_breed_name().boxed()
            } else {
                prop_oneof![prop::sample::select(known), arb_breed_name()].boxed()
            };
            (Just(catalog), prop::collection::vec(lookup, 0..24))
        })
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built fixtures for the common caching scenarios.

    use super::*;

    /// The scenario catalog as JSON.
    pub const SCENARIO_CATALOG_JSON: &str = r#"{
        "boxer": ["stock"],
        "hound": ["afghan", "basset", "blood", "english", "ibizan", "plott", "walker"],
        "husky": [],
        "pug": ["frug"],
        "terrier": ["affenpinscher"]
    }"#;

    /// A breed no fixture source knows about.
    pub const UNKNOWN_BREED: &str = "unicorn";

    /// Catalog used by the scenario tests.
    pub fn scenario_catalog() -> BreedCatalog {
        BreedCatalog::new()
            .with_breed("boxer", ["stock"])
            .with_breed(
                "hound",
                ["afghan", "basset", "blood", "english", "ibizan", "plott", "walker"],
            )
            .with_breed("husky", Vec::<String>::new())
            .with_breed("pug", ["frug"])
            .with_breed("terrier", ["affenpinscher"])
    }

    /// Fresh source over [`scenario_catalog`] with no recorded lookups.
    pub fn scenario_fetcher() -> InMemoryBreedFetcher {
        InMemoryBreedFetcher::new(scenario_catalog())
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions for breed lookup results.

    use super::*;

    /// Assert that a lookup succeeded with exactly `expected`, in order.
    #[track_caller]
    pub fn assert_sub_breeds(result: &BreedResult<Vec<String>>, expected: &[&str]) {
        match result {
            Ok(sub_breeds) => assert_eq!(sub_breeds, expected, "Unexpected sub-breeds"),
            Err(err) => panic!("Expected sub-breeds {:?}, got: {}", expected, err),
        }
    }

    /// Assert that a lookup failed with BreedNotFound for `breed`.
    #[track_caller]
    pub fn assert_breed_not_found(result: &BreedResult<Vec<String>>, breed: &str) {
        match result {
            Err(err) => assert_eq!(err.breed, breed, "Wrong breed in BreedNotFound"),
            Ok(sub_breeds) => panic!(
                "Expected BreedNotFound for {:?}, got: {:?}",
                breed, sub_breeds
            ),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
