//! The finished, immutable search index.
//!
//! Normalized labels are stored in an FST map whose values point into a
//! table of entry groups. One group holds every entry sharing a normalized
//! label, so a lookup is a single FST probe followed by a slice borrow.

use crate::error::IndexResult;
use crate::normalizer::normalize_label;
use crate::types::{CategoryFilter, EntityCategory, IndexEntry, IndexKey};
use serde::Serialize;
use std::collections::BTreeMap;

/// Exact, case-insensitive lookup over the entities of one dataset.
///
/// Built by [`SearchIndexBuilder`](crate::SearchIndexBuilder); read-only for
/// its whole lifetime and safe to share between threads.
pub struct SearchIndex {
    labels: fst::Map<Vec<u8>>,
    groups: Vec<Vec<IndexEntry>>,
    len: usize,
}

/// Entry counts per category family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub genes: usize,
    pub clusterings: usize,
    pub regulons: usize,
    pub annotations: usize,
    pub metrics: usize,
}

impl IndexStats {
    pub fn total(&self) -> usize {
        self.genes + self.clusterings + self.regulons + self.annotations + self.metrics
    }
}

impl SearchIndex {
    pub fn empty() -> Self {
        Self {
            labels: fst::MapBuilder::memory().into_map(),
            groups: Vec::new(),
            len: 0,
        }
    }

    /// Freeze a key-ordered entry map into an index.
    pub(crate) fn from_entries(entries: BTreeMap<IndexKey, String>) -> IndexResult<Self> {
        let len = entries.len();
        let mut labels = fst::MapBuilder::memory();
        let mut groups: Vec<Vec<IndexEntry>> = Vec::new();

        // BTreeMap order is byte order on the normalized label first, which is
        // the insertion order the FST builder requires.
        for (key, canonical_value) in entries {
            let starts_group = groups
                .last()
                .and_then(|group| group.first())
                .map_or(true, |first| first.normalized_label() != key.normalized_label());
            if starts_group {
                labels.insert(key.normalized_label(), groups.len() as u64)?;
                groups.push(Vec::new());
            }
            if let Some(group) = groups.last_mut() {
                group.push(IndexEntry::new(key, canonical_value));
            }
        }

        Ok(Self {
            labels: labels.into_map(),
            groups,
            len,
        })
    }

    /// Every entry whose normalized label equals the case-folded `term`,
    /// ordered by raw label then category.
    pub fn query(&self, term: &str) -> &[IndexEntry] {
        let normalized = normalize_label(term);
        self.labels
            .get(normalized.as_bytes())
            .and_then(|slot| self.groups.get(slot as usize))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Like [`query`](Self::query), keeping only entries of one category family.
    pub fn query_filtered(&self, term: &str, filter: CategoryFilter) -> Vec<&IndexEntry> {
        self.query(term)
            .iter()
            .filter(|entry| filter.matches(entry.category()))
            .collect()
    }

    pub fn contains(&self, term: &str) -> bool {
        !self.query(term).is_empty()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct normalized labels.
    pub fn label_count(&self) -> usize {
        self.groups.len()
    }

    /// All entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &IndexEntry> {
        self.groups.iter().flatten()
    }

    pub fn stats(&self) -> IndexStats {
        self.iter()
            .fold(IndexStats::default(), |mut stats, entry| {
                match entry.category() {
                    EntityCategory::Gene => stats.genes += 1,
                    EntityCategory::Clustering(_) => stats.clusterings += 1,
                    EntityCategory::Regulon => stats.regulons += 1,
                    EntityCategory::Annotation => stats.annotations += 1,
                    EntityCategory::Metric => stats.metrics += 1,
                }
                stats
            })
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndex")
            .field("labels", &self.groups.len())
            .field("entries", &self.len)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
