//! Breed catalog configuration

use crate::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Static mapping from breed name to its ordered sub-breeds.
///
/// Serialized as a flat JSON object, the same shape the public dog API uses
/// for its breed listing:
///
/// ```json
/// { "hound": ["afghan", "basset"], "pug": [] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreedCatalog {
    breeds: BTreeMap<String, Vec<String>>,
}

impl BreedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let catalog: BreedCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serialize the catalog as pretty-printed JSON.
    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add or replace a breed.
    pub fn with_breed<I, S>(mut self, breed: impl Into<String>, sub_breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(breed, sub_breeds);
        self
    }

    /// Add or replace a breed in place.
    pub fn insert<I, S>(&mut self, breed: impl Into<String>, sub_breeds: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breeds
            .insert(breed.into(), sub_breeds.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, breed: &str) -> Option<&[String]> {
        self.breeds.get(breed).map(Vec::as_slice)
    }

    pub fn contains(&self, breed: &str) -> bool {
        self.breeds.contains_key(breed)
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    /// Breed names in sorted order.
    pub fn breeds(&self) -> impl Iterator<Item = &str> {
        self.breeds.keys().map(String::as_str)
    }

    /// Validate the catalog.
    ///
    /// Breed and sub-breed names must be non-empty, and a sub-breed may
    /// appear at most once per breed.
    pub fn validate(&self) -> CatalogResult<()> {
        for (breed, sub_breeds) in &self.breeds {
            if breed.is_empty() {
                return Err(CatalogError::InvalidValue {
                    field: "breed".to_string(),
                    value: breed.clone(),
                    reason: "breed name must not be empty".to_string(),
                });
            }

            let mut seen = HashSet::with_capacity(sub_breeds.len());
            for sub_breed in sub_breeds {
                if sub_breed.is_empty() {
                    return Err(CatalogError::InvalidValue {
                        field: format!("{}.sub_breeds", breed),
                        value: sub_breed.clone(),
                        reason: "sub-breed name must not be empty".to_string(),
                    });
                }
                if !seen.insert(sub_breed.as_str()) {
                    return Err(CatalogError::DuplicateSubBreed {
                        breed: breed.clone(),
                        sub_breed: sub_breed.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl<K, V, S> FromIterator<(K, V)> for BreedCatalog
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut catalog = BreedCatalog::new();
        for (breed, sub_breeds) in iter {
            catalog.insert(breed, sub_breeds);
        }
        catalog
    }
}

impl IntoIterator for BreedCatalog {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.breeds.into_iter()
    }
}
