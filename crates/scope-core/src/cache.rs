//! Caller-side cache of finished indexes.
//!
//! One index is kept per `(dataset, cross-species target)` for the life of a
//! dataset session. Reloading a dataset invalidates every index built from it.

use crate::error::IndexResult;
use crate::index::SearchIndex;
use crate::species::Species;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub dataset: String,
    pub cross_species: Option<Species>,
}

impl CacheKey {
    pub fn new(dataset: impl Into<String>, cross_species: Option<Species>) -> Self {
        Self {
            dataset: dataset.into(),
            cross_species,
        }
    }
}

#[derive(Debug, Default)]
pub struct IndexCache {
    entries: RwLock<HashMap<CacheKey, Arc<SearchIndex>>>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<SearchIndex>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Return the cached index for `key`, building it on a miss.
    ///
    /// The build runs without holding the lock. If two callers race on the
    /// same key, the first index stored wins and both receive it. Failed
    /// builds are not cached.
    pub fn get_or_build<F>(&self, key: CacheKey, build: F) -> IndexResult<Arc<SearchIndex>>
    where
        F: FnOnce() -> IndexResult<SearchIndex>,
    {
        if let Some(index) = self.get(&key) {
            return Ok(index);
        }
        debug!(dataset = %key.dataset, cross_species = ?key.cross_species, "index cache miss");
        let built = Arc::new(build()?);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(entries.entry(key).or_insert(built)))
    }

    /// Drop every index built from `dataset`. Returns how many were removed.
    pub fn invalidate(&self, dataset: &str) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|key, _| key.dataset != dataset);
        let removed = before - entries.len();
        debug!(dataset, removed, "index cache invalidated");
        removed
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
