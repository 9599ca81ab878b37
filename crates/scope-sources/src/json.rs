//! JSON dataset backend.
//!
//! A dataset description file looks like:
//!
//! ```json
//! {
//!   "species": "dmel",
//!   "genes": ["CG1", "CG2"],
//!   "meta_data": {
//!     "clusterings": [{"name": "Seurat", "clusters": [{"description": "T-cell"}]}],
//!     "annotations": [{"name": "Tissue"}],
//!     "metrics": [{"name": "nUMI"}]
//!   },
//!   "regulons_auc": {"fields": ["Adf1(+)"]}
//! }
//! ```
//!
//! Every key is optional. Without `species`, the species is inferred from
//! the gene symbols. The gene mapping is the resource's default table for
//! that species.

use crate::error::SourceError;
use crate::infer::infer_species;
use scope_core::metadata::{ANNOTATIONS, CLUSTERINGS, METRICS};
use scope_core::{
    EntitySource, MetaData, RegulonMatrix, Species, SpeciesMapping, SpeciesMappingResource,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Default, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    species: Option<String>,
    #[serde(default)]
    genes: Vec<String>,
    #[serde(default)]
    meta_data: Option<MetaData>,
    #[serde(default)]
    regulons_auc: Option<RegulonMatrix>,
}

/// A dataset read from a JSON description file.
#[derive(Debug, Clone)]
pub struct JsonDataset {
    path: PathBuf,
    species: Species,
    gene_mapping: SpeciesMapping,
    genes: Vec<String>,
    meta_data: Option<MetaData>,
    regulons: Option<RegulonMatrix>,
}

impl JsonDataset {
    pub fn open(path: &Path, resource: &SpeciesMappingResource) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &text, resource)
    }

    /// Parse a description already held in memory. `path` is only used to
    /// identify the dataset and label errors.
    pub fn from_json(
        path: &Path,
        text: &str,
        resource: &SpeciesMappingResource,
    ) -> Result<Self, SourceError> {
        let file: DatasetFile = serde_json::from_str(text).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        let species = match file.species.as_deref() {
            Some(code) => Species::parse(code),
            None => infer_species(&file.genes),
        };
        let gene_mapping = resource
            .default_table(&species)
            .cloned()
            .unwrap_or_default();

        info!(
            path = %path.display(),
            %species,
            genes = file.genes.len(),
            mapped = !gene_mapping.is_empty(),
            "dataset opened"
        );

        Ok(Self {
            path: path.to_path_buf(),
            species,
            gene_mapping,
            genes: file.genes,
            meta_data: file.meta_data,
            regulons: file.regulons_auc,
        })
    }

    /// Identifier for cache keys: the file path as given.
    pub fn id(&self) -> String {
        self.path.display().to_string()
    }

    fn has_section(&self, section: &str) -> bool {
        self.meta_data
            .as_ref()
            .is_some_and(|md| md.has_section(section))
    }
}

impl EntitySource for JsonDataset {
    fn infer_species(&self) -> (Species, SpeciesMapping) {
        (self.species.clone(), self.gene_mapping.clone())
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
