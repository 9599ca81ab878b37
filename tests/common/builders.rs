//! Test builders — ergonomic constructors for gene tables, resources,
//! datasets, and on-disk workspaces.
//!
//! These builders favour readability in assertions over production use. They
//! panic on invalid input rather than returning `Result`.

use super::fixtures::*;
use scope_core::{
    EntityCategory, EntitySource, OrthologPair, SearchIndex, SearchIndexBuilder, Species,
    SpeciesMapping, SpeciesMappingResource,
};
use scope_sources::InMemoryDataset;
use std::path::{Path, PathBuf};

/// A flattened index entry: `(normalized, raw, category, canonical value)`.
pub type Row = (String, String, EntityCategory, String);

pub fn mapping(pairs: &[(&str, &str)]) -> SpeciesMapping {
    pairs.iter().copied().collect()
}

/// Both ortholog tables plus the default fly table.
pub fn standard_resource() -> SpeciesMappingResource {
    SpeciesMappingResource::new()
        .with_orthologs(OrthologPair::HsapToDmel, mapping(HSAP_TO_DMEL))
        .with_orthologs(OrthologPair::MmusToDmel, mapping(MMUS_TO_DMEL))
        .with_default(Species::Dmel, mapping(DMEL_DEFAULT))
}

/// A fly dataset with [`FLY_GENES`] and no gene mapping.
pub fn fly_dataset() -> InMemoryDataset {
    InMemoryDataset::new().species(Species::Dmel).genes(FLY_GENES.iter().copied())
}

/// Build with default options, panicking on error.
pub fn build<S: EntitySource + ?Sized>(
    resource: &SpeciesMappingResource,
    source: &S,
    cross_species: Option<Species>,
) -> SearchIndex {
    SearchIndexBuilder::new(resource)
        .build(source, cross_species.as_ref())
        .expect("build should succeed")
}

/// Every entry of `index`, in key order.
pub fn rows(index: &SearchIndex) -> Vec<Row> {
    index
        .iter()
        .map(|e| {
            (
                e.normalized_label().to_string(),
                e.raw_label().to_string(),
                e.category().clone(),
                e.canonical_value().to_string(),
            )
        })
        .collect()
}

/// Shorthand for an expected [`Row`].
pub fn row(normalized: &str, raw: &str, category: EntityCategory, value: &str) -> Row {
    (
        normalized.to_string(),
        raw.to_string(),
        category,
        value.to_string(),
    )
}

// ---------------------------------------------------------------------------
// On-disk workspace
// ---------------------------------------------------------------------------

/// Lays out gene tables, a config file, and dataset files under one root.
pub struct Workspace {
    root: PathBuf,
    strict_cross_species: bool,
    with_mmus: bool,
}

impl Workspace {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            strict_cross_species: false,
            with_mmus: true,
        }
    }

    pub fn strict(mut self) -> Self {
        self.strict_cross_species = true;
        self
    }

    /// Leave the mouse ortholog table out of the mappings directory.
    pub fn without_mmus_table(mut self) -> Self {
        self.with_mmus = false;
        self
    }

    /// Write tables and config; returns the config path.
    pub fn write(&self) -> PathBuf {
        let dir = self.root.join("mappings");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("hsap_to_dmel.tsv"), tsv(HSAP_TO_DMEL)).unwrap();
        if self.with_mmus {
            std::fs::write(dir.join("mmus_to_dmel.tsv"), tsv(MMUS_TO_DMEL)).unwrap();
        }
        std::fs::write(dir.join("dmel.tsv"), tsv(DMEL_DEFAULT)).unwrap();

        let config = format!(
            "[mappings]\ndir = {:?}\n\n[index]\nstrict_cross_species = {}\n",
            dir.display().to_string(),
            self.strict_cross_species
        );
        let path = self.root.join("config.toml");
        std::fs::write(&path, config).unwrap();
        path
    }

    pub fn dataset(&self, name: &str, body: serde_json::Value) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, serde_json::to_string_pretty(&body).unwrap()).unwrap();
        path
    }
}
