//! In-memory dataset backend.
//!
//! Useful when a serving layer has already decoded a dataset into plain
//! collections, and as the fixture type for tests and benchmarks.

use crate::infer::infer_species;
use scope_core::metadata::{ANNOTATIONS, CLUSTERINGS, METRICS};
use scope_core::{EntitySource, MetaData, RegulonMatrix, Species, SpeciesMapping};

/// A dataset assembled from owned collections.
///
/// ```rust
/// use scope_core::Species;
/// use scope_sources::InMemoryDataset;
///
/// let dataset = InMemoryDataset::new()
///     .species(Species::Dmel)
///     .genes(["CG1", "CG2"])
///     .regulons(["Adf1(+)"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    species: Option<Species>,
    gene_mapping: SpeciesMapping,
    genes: Vec<String>,
    meta_data: Option<MetaData>,
    regulons: Option<RegulonMatrix>,
}

impl InMemoryDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the species explicitly. Without it the species is inferred from
    /// the gene symbols.
    pub fn species(mut self, species: Species) -> Self {
        self.species = Some(species);
        self
    }

    pub fn gene_mapping(mut self, mapping: SpeciesMapping) -> Self {
        self.gene_mapping = mapping;
        self
    }

    pub fn genes<I, S>(mut self, genes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genes = genes.into_iter().map(Into::into).collect();
        self
    }

    pub fn meta_data(mut self, meta_data: MetaData) -> Self {
        self.meta_data = Some(meta_data);
        self
    }

    pub fn regulons<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regulons = Some(RegulonMatrix::new(names));
        self
    }

    fn has_section(&self, section: &str) -> bool {
        self.meta_data
            .as_ref()
            .is_some_and(|md| md.has_section(section))
    }
}

impl EntitySource for InMemoryDataset {
    fn infer_species(&self) -> (Species, SpeciesMapping) {
        let species = self
            .species
            .clone()
            .unwrap_or_else(|| infer_species(&self.genes));
        (species, self.gene_mapping.clone())
    }

    fn genes(&self) -> Vec<String> {
        self.genes.clone()
    }

    fn has_meta_data(&self) -> bool {
        self.meta_data.is_some()
    }

    fn meta_data(&self) -> MetaData {
        self.meta_data.clone().unwrap_or_default()
    }

    fn has_clusterings(&self) -> bool {
        self.has_section(CLUSTERINGS)
    }

    fn has_regulons_auc(&self) -> bool {
        self.regulons.is_some()
    }

    fn regulons_auc(&self) -> RegulonMatrix {
        self.regulons.clone().unwrap_or_default()
    }

    fn has_annotations(&self) -> bool {
        self.has_section(ANNOTATIONS)
    }

    fn has_metrics(&self) -> bool {
        self.has_section(METRICS)
    }
}
