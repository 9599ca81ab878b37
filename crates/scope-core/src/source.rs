//! The capability set a dataset backend exposes to the index builder.

use crate::metadata::MetaData;
use crate::species::{Species, SpeciesMapping};
use serde::{Deserialize, Serialize};

/// Dataset introspection consumed by [`SearchIndexBuilder`](crate::SearchIndexBuilder).
///
/// Each `has_*` check gates the matching getter; the builder never calls a
/// getter whose check returned `false`. Implementations answer from data
/// they already hold, so none of these methods can fail.
pub trait EntitySource {
    /// The dataset's species and its gene-symbol mapping (empty when the
    /// species has none).
    fn infer_species(&self) -> (Species, SpeciesMapping);

    /// Every gene symbol in the dataset.
    fn genes(&self) -> Vec<String>;

    fn has_meta_data(&self) -> bool;

    fn meta_data(&self) -> MetaData;

    fn has_clusterings(&self) -> bool;

    fn has_regulons_auc(&self) -> bool;

    fn regulons_auc(&self) -> RegulonMatrix;

    fn has_annotations(&self) -> bool;

    fn has_metrics(&self) -> bool;
}

/// Regulon activity matrix. Only the named fields (one per regulon) matter
/// to the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulonMatrix {
    #[serde(default)]
    fields: Vec<String>,
}

impl RegulonMatrix {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn field_names(&self) -> &[String] {
        &self.fields
    }
}
