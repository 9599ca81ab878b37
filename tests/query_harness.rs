#![allow(unused)]
//! Query semantics integration harness.
//!
//! # What this covers
//!
//! - **Case-insensitivity**: `query("BRCA1")` and `query("brca1")` return
//!   identical result sets.
//! - **Exactness**: no prefix, substring, or fuzzy matches.
//! - **Provenance**: a label present under several categories returns one hit
//!   per category, and the category filter narrows them.
//! - **Property: one value per key**: the index holds exactly one entry per
//!   distinct `(raw label, category)` ingested.
//! - **Full case folding**: `ß` matches `SS` and final sigma matches medial
//!   sigma, for free-text annotation names as well as gene symbols.
//! - **Property: case-insensitivity** over random labels (including
//!   non-ASCII letters whose case mappings expand or depend on context) and
//!   casings.
//! - **Property: shrink set**: indexed genes are always table keys touching
//!   the dataset gene set.
//!
//! # Running
//!
//! ```sh
//! cargo test --test query_harness
//! ```

mod common;
use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use scope_core::{
    CategoryFilter, EntityCategory, MetaData, SearchIndexBuilder, Species, SpeciesMapping,
    SpeciesMappingResource,
};
use scope_sources::InMemoryDataset;
use serde_json::json;
use std::collections::{BTreeSet, HashSet};

/// A fly dataset where "Tissue" is an annotation, a metric, and a gene.
fn overlapping_dataset() -> InMemoryDataset {
    InMemoryDataset::new()
        .species(Species::Dmel)
        .genes(["BRCA1", "tissue"])
        .meta_data(MetaData::new(json!({
            "annotations": [{"name": "Tissue"}],
            "metrics": [{"name": "TISSUE"}],
        })))
}

#[test]
fn query_ignores_case() {
    let resource = SpeciesMappingResource::new();
    let index = build(&resource, &overlapping_dataset(), None);

    assert_eq!(index.query("BRCA1"), index.query("brca1"));
    assert_eq!(index.query("BrCa1").len(), 1);
}

#[test]
fn query_is_exact() {
    let resource = SpeciesMappingResource::new();
    let index = build(&resource, &overlapping_dataset(), None);

    assert_no_hit!(index, "brca");
    assert_no_hit!(index, "rca1");
    assert_no_hit!(index, "brca1 ");
    assert_no_hit!(index, "");
}

#[test]
fn same_label_in_several_categories() {
    let resource = SpeciesMappingResource::new();
    let index = build(&resource, &overlapping_dataset(), None);

    let hits: Vec<_> = index
        .query("tissue")
        .iter()
        .map(|e| (e.raw_label().to_string(), e.category().clone()))
        .collect();
    assert_eq!(
        hits,
        vec![
            ("TISSUE".to_string(), EntityCategory::Metric),
            ("Tissue".to_string(), EntityCategory::Annotation),
            ("tissue".to_string(), EntityCategory::Gene),
        ]
    );

    let annotations = index.query_filtered("TISSUE", CategoryFilter::Annotation);
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].raw_label(), "Tissue");
    assert!(index.contains("tIsSuE"));
}

#[test]
fn mapped_gene_is_found_by_its_own_symbol_not_its_target() {
    let resource = SpeciesMappingResource::new()
        .with_default(Species::Dmel, mapping(&[("CG1", "Adh")]));
    let dataset = InMemoryDataset::new()
        .species(Species::Dmel)
        .genes(["CG1"])
        .gene_mapping(mapping(&[("CG1", "Adh")]));

    let index = build(&resource, &dataset, None);

    assert_hit!(index, "cg1" => "CG1", EntityCategory::Gene, "Adh");
    assert_no_hit!(index, "adh");
}

#[test]
fn free_text_labels_match_under_full_case_folding() {
    let resource = SpeciesMappingResource::new();
    let dataset = InMemoryDataset::new()
        .species(Species::Dmel)
        .meta_data(MetaData::new(json!({
            "annotations": [{"name": "Straße"}, {"name": "ΟΔΟΣ"}],
        })));

    let index = build(&resource, &dataset, None);

    assert_hit!(index, "STRASSE" => "Straße", EntityCategory::Annotation, "Straße");
    assert_hit!(index, "strasse" => "Straße", EntityCategory::Annotation, "Straße");
    assert_hit!(index, "οδοσ" => "ΟΔΟΣ", EntityCategory::Annotation, "ΟΔΟΣ");
    assert_hit!(index, "οδος" => "ΟΔΟΣ", EntityCategory::Annotation, "ΟΔΟΣ");
    assert_eq!(index.query("Straße"), index.query("STRASSE"));
    assert_keys_normalized(&index);
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

fn label() -> impl Strategy<Value = String> {
    "[A-Za-zßẞΣσςÉéΩω][A-Za-z0-9ßẞΣσςÉéΩω_-]{0,8}"
}

proptest! {
    /// Every distinct (raw label, category) pair ingested yields exactly one
    /// entry, however often it recurs.
    #[test]
    fn one_entry_per_distinct_key(
        genes in prop::collection::vec(label(), 0..20),
        metrics in prop::collection::vec(label(), 0..20),
    ) {
        let resource = SpeciesMappingResource::new();
        let meta = json!({
            "metrics": metrics.iter().map(|m| json!({"name": m})).collect::<Vec<_>>(),
        });
        let dataset = InMemoryDataset::new()
            .species(Species::Dmel)
            .genes(genes.clone())
            .meta_data(MetaData::new(meta));

        let index = build(&resource, &dataset, None);

        let distinct_genes: BTreeSet<_> = genes.iter().collect();
        let distinct_metrics: BTreeSet<_> = metrics.iter().collect();
        prop_assert_eq!(index.len(), distinct_genes.len() + distinct_metrics.len());
        prop_assert_eq!(index.stats().genes, distinct_genes.len());
    }

    /// Upper-, lower-, and as-ingested casings of a label all return the
    /// same hits.
    #[test]
    fn case_insensitive_for_every_label(labels in prop::collection::vec(label(), 1..20)) {
        let resource = SpeciesMappingResource::new();
        let dataset = InMemoryDataset::new().species(Species::Dmel).genes(labels.clone());
        let index = build(&resource, &dataset, None);

        for label in &labels {
            let upper = index.query(&label.to_uppercase());
            prop_assert!(!upper.is_empty());
            prop_assert_eq!(upper, index.query(&label.to_lowercase()));
            prop_assert_eq!(upper, index.query(label));
        }
    }

    /// With a gene mapping, every indexed gene is a table key whose source
    /// or target symbol is a dataset gene.
    #[test]
    fn indexed_genes_come_from_the_shrink_set(
        genes in prop::collection::hash_set("g[0-9]", 0..8),
        table in prop::collection::hash_map("g[0-9]", "g[0-9]", 1..8),
    ) {
        let table_mapping: SpeciesMapping = table.clone().into_iter().collect();
        let resource = SpeciesMappingResource::new();
        let dataset = InMemoryDataset::new()
            .species(Species::Other("test".into()))
            .genes(genes.clone())
            .gene_mapping(table_mapping);

        let index = build(&resource, &dataset, None);

        for entry in index.iter() {
            let raw = entry.raw_label();
            let target = table.get(raw);
            prop_assert!(target.is_some(), "{} is not a table key", raw);
            prop_assert!(genes.contains(raw) || target.is_some_and(|t| genes.contains(t)));
        }
        let expected = table
            .iter()
            .filter(|(s, t)| genes.contains(*s) || genes.contains(*t))
            .count();
        prop_assert_eq!(index.len(), expected);
    }
}
