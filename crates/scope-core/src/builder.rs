//! Index builder — turns one dataset into a [`SearchIndex`].
//!
//! A build runs in one of two modes:
//!
//! - **Normal**: genes, clusterings, regulons, annotations, and metrics are
//!   ingested, each gated by the source's availability check. When the
//!   dataset has a gene mapping, only the *shrink set* of mapped genes is
//!   indexed and each gene resolves to its mapped symbol.
//! - **Cross-species**: only the source-side symbols of the ortholog table
//!   for `(target, species)` are indexed, each as itself.
//!
//! Entries land in a key-ordered working map (last write wins) that is frozen
//! into the index once ingestion completes.

use crate::config::IndexConfig;
use crate::error::{IndexError, IndexResult};
use crate::index::SearchIndex;
use crate::metadata::MetaData;
use crate::source::{EntitySource, RegulonMatrix};
use crate::species::{OrthologPair, Species, SpeciesMapping, SpeciesMappingResource};
use crate::types::{EntityCategory, IndexKey};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

/// Synthetic label indexed once per clustering.
pub const ALL_CLUSTERS: &str = "All Clusters";

/// Knobs that change build behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Fail with [`IndexError::UnsupportedPair`] instead of producing an
    /// empty index when no ortholog table covers the requested pair.
    pub strict_cross_species: bool,
}

impl From<&IndexConfig> for BuildOptions {
    fn from(config: &IndexConfig) -> Self {
        Self {
            strict_cross_species: config.strict_cross_species,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Unbuilt,
    Built,
}

/// Mutable build stage for a [`SearchIndex`].
///
/// Owns its working map exclusively, so independent builders can run on
/// different threads against the same [`SpeciesMappingResource`].
pub struct SearchIndexBuilder<'r> {
    resource: &'r SpeciesMappingResource,
    options: BuildOptions,
    entries: BTreeMap<IndexKey, String>,
    gene_mapping: SpeciesMapping,
    cross_species: bool,
    state: BuildState,
}

impl<'r> SearchIndexBuilder<'r> {
    pub fn new(resource: &'r SpeciesMappingResource) -> Self {
        Self {
            resource,
            options: BuildOptions::default(),
            entries: BTreeMap::new(),
            gene_mapping: SpeciesMapping::default(),
            cross_species: false,
            state: BuildState::Unbuilt,
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Index `source`, or the cross-species ortholog symbols for it when
    /// `cross_species` names a target species.
    ///
    /// Each call starts from an empty working map; nothing carries over from
    /// a previous build.
    pub fn build<S>(&mut self, source: &S, cross_species: Option<&Species>) -> IndexResult<SearchIndex>
    where
        S: EntitySource + ?Sized,
    {
        self.entries.clear();
        let (species, gene_mapping) = source.infer_species();
        self.gene_mapping = gene_mapping;
        self.cross_species = cross_species.is_some();

        match cross_species {
            Some(target) => self.add_cross_species_genes(target, &species)?,
            None => self.add_dataset_entities(source, &species)?,
        }

        let index = SearchIndex::from_entries(std::mem::take(&mut self.entries))?;
        self.state = BuildState::Built;
        info!(
            %species,
            cross_species = ?cross_species.map(Species::code),
            entries = index.len(),
            labels = index.label_count(),
            "search index built"
        );
        Ok(index)
    }

    /// Insert one entity, overwriting any entry with the same key.
    ///
    /// Outside cross-species mode, a gene present in the dataset's gene
    /// mapping resolves to its mapped symbol. Everything else maps to itself.
    pub fn add_entity(&mut self, raw_label: &str, category: EntityCategory) {
        let canonical_value = match category {
            EntityCategory::Gene if !self.cross_species && !self.gene_mapping.is_empty() => self
                .gene_mapping
                .get(raw_label)
                .filter(|mapped| *mapped != raw_label)
                .unwrap_or(raw_label)
                .to_string(),
            _ => raw_label.to_string(),
        };
        self.entries
            .insert(IndexKey::new(raw_label, category), canonical_value);
    }

    /// Insert every label under `category`, in sorted order so that repeated
    /// builds of the same dataset write keys in the same sequence.
    pub fn add_entities<I, L>(&mut self, labels: I, category: EntityCategory) -> usize
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut labels: Vec<L> = labels.into_iter().collect();
        labels.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
        for label in &labels {
            self.add_entity(label.as_ref(), category.clone());
        }
        labels.len()
    }

    // -----------------------------------------------------------------------
    // Cross-species mode
    // -----------------------------------------------------------------------

    fn add_cross_species_genes(&mut self, target: &Species, species: &Species) -> IndexResult<()> {
        let Some(pair) = OrthologPair::select(target, species) else {
            if self.options.strict_cross_species {
                return Err(IndexError::UnsupportedPair {
                    target: target.clone(),
                    species: species.clone(),
                });
            }
            warn!(%target, %species, "unsupported cross-species pair, index left empty");
            return Ok(());
        };

        let resource = self.resource;
        let Some(table) = resource.orthologs(pair) else {
            warn!(%pair, "ortholog table not loaded, index left empty");
            return Ok(());
        };
        let count = self.add_entities(table.keys(), EntityCategory::Gene);
        debug!(%pair, genes = count, "indexed ortholog symbols");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Normal mode
    // -----------------------------------------------------------------------

    fn add_dataset_entities<S>(&mut self, source: &S, species: &Species) -> IndexResult<()>
    where
        S: EntitySource + ?Sized,
    {
        let meta_data = source.has_meta_data().then(|| source.meta_data());

        self.add_genes(source.genes(), species);

        if source.has_clusterings() {
            match &meta_data {
                Some(md) => self.add_clusterings(md)?,
                None => debug!("clusterings reported without metadata, skipping"),
            }
        }
        if source.has_regulons_auc() {
            self.add_regulons(&source.regulons_auc());
        }
        if source.has_annotations() {
            match &meta_data {
                Some(md) => {
                    let count = self.add_entities(md.annotation_names()?, EntityCategory::Annotation);
                    debug!(annotations = count, "indexed annotations");
                }
                None => debug!("annotations reported without metadata, skipping"),
            }
        }
        if source.has_metrics() {
            match &meta_data {
                Some(md) => {
                    let count = self.add_entities(md.metric_names()?, EntityCategory::Metric);
                    debug!(metrics = count, "indexed metrics");
                }
                None => debug!("metrics reported without metadata, skipping"),
            }
        }
        Ok(())
    }

    fn add_genes(&mut self, genes: Vec<String>, species: &Species) {
        if self.gene_mapping.is_empty() {
            let count = self.add_entities(genes, EntityCategory::Gene);
            debug!(genes = count, "indexed dataset genes");
            return;
        }

        let genes: HashSet<String> = genes.into_iter().collect();
        let table = self
            .resource
            .default_table(species)
            .unwrap_or(&self.gene_mapping)
            .clone();
        let shrunk = shrink_set(&table, &genes);
        let count = self.add_entities(shrunk, EntityCategory::Gene);
        debug!(
            genes = count,
            dataset_genes = genes.len(),
            table = table.len(),
            "indexed shrunk gene mapping"
        );
    }

    fn add_clusterings(&mut self, meta_data: &MetaData) -> IndexResult<()> {
        for clustering in meta_data.clusterings()? {
            let labels = std::iter::once(ALL_CLUSTERS.to_string())
                .chain(clustering.cluster_descriptions);
            let count = self.add_entities(labels, EntityCategory::Clustering(clustering.name.clone()));
            debug!(clustering = %clustering.name, labels = count, "indexed clustering");
        }
        Ok(())
    }

    fn add_regulons(&mut self, matrix: &RegulonMatrix) {
        let count = self.add_entities(matrix.field_names(), EntityCategory::Regulon);
        debug!(regulons = count, "indexed regulons");
    }
}

/// Keys of `table` whose source symbol or mapped target symbol is one of the
/// dataset's `genes`.
pub fn shrink_set(table: &SpeciesMapping, genes: &HashSet<String>) -> Vec<String> {
    table
        .iter()
        .filter(|(source, target)| genes.contains(*source) || genes.contains(*target))
        .map(|(source, _)| source.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
