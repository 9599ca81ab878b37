//! Domain-specific assertions for scope-search harnesses.
//!
//! These add context-rich failure messages that say *which* index invariant
//! was violated and show what the index actually holds.

use scope_core::normalizer::normalize_label;
use scope_core::{EntityCategory, SearchIndex};

/// Assert that querying `term` yields an entry with this raw label and
/// category, resolving to `value`.
///
/// ```rust
/// assert_hit!(index, "brca1" => "BRCA1", EntityCategory::Gene, "BRCA1");
/// ```
#[macro_export]
macro_rules! assert_hit {
    ($index:expr, $term:expr => $raw:expr, $category:expr, $value:expr) => {{
        let index: &scope_core::SearchIndex = &$index;
        let term: &str = $term;
        let raw: &str = $raw;
        let category: scope_core::EntityCategory = $category;
        let value: &str = $value;
        let hits = index.query(term);
        match hits
            .iter()
            .find(|e| e.raw_label() == raw && *e.category() == category)
        {
            Some(hit) if hit.canonical_value() == value => {}
            Some(hit) => panic!(
                "assert_hit! failed: {:?} ({}) resolves to {:?}, expected {:?}",
                raw,
                category,
                hit.canonical_value(),
                value
            ),
            None => panic!(
                "assert_hit! failed: query {:?} has no {:?} ({}) entry.\n  hits: {:?}",
                term, raw, category, hits
            ),
        }
    }};
}

/// Assert that querying `term` yields nothing.
#[macro_export]
macro_rules! assert_no_hit {
    ($index:expr, $term:expr) => {{
        let index: &scope_core::SearchIndex = &$index;
        let term: &str = $term;
        let hits = index.query(term);
        if !hits.is_empty() {
            panic!(
                "assert_no_hit! failed: query {:?} returned {} entries: {:?}",
                term,
                hits.len(),
                hits
            );
        }
    }};
}

/// Raw labels of every entry in `category`, sorted.
pub fn raw_labels_in(index: &SearchIndex, category: &EntityCategory) -> Vec<String> {
    let mut labels: Vec<String> = index
        .iter()
        .filter(|e| e.category() == category)
        .map(|e| e.raw_label().to_string())
        .collect();
    labels.sort();
    labels
}

/// Assert the index-wide invariant: every key's normalized label is the
/// full case-fold of its raw label.
pub fn assert_keys_normalized(index: &SearchIndex) {
    for entry in index.iter() {
        assert_eq!(
            entry.normalized_label(),
            normalize_label(entry.raw_label()),
            "normalized label disagrees with raw label {:?}",
            entry.raw_label()
        );
    }
}
