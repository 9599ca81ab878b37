//! Core types for scope-core.
//!
//! This module defines the shapes shared by the builder and the finished
//! index: the [`EntityCategory`] provenance tag, the [`IndexKey`] triple, and
//! the [`IndexEntry`] that pairs a key with its canonical value.

use crate::error::IndexError;
use crate::normalizer::normalize_label;
use serde::Serialize;
use std::str::FromStr;

/// Which kind of dataset entity an index entry came from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EntityCategory {
    Gene,
    /// Cluster labels, tagged with the name of the clustering they belong to.
    Clustering(String),
    Regulon,
    Annotation,
    Metric,
}

impl EntityCategory {
    pub fn clustering(name: impl Into<String>) -> Self {
        EntityCategory::Clustering(name.into())
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityCategory::Gene => write!(f, "gene"),
            EntityCategory::Clustering(name) => write!(f, "Clustering: {name}"),
            EntityCategory::Regulon => write!(f, "regulon"),
            EntityCategory::Annotation => write!(f, "annotation"),
            EntityCategory::Metric => write!(f, "metric"),
        }
    }
}

/// Restricts query results to one family of categories.
///
/// `Clustering` matches every clustering regardless of its name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Gene,
    Clustering,
    Regulon,
    Annotation,
    Metric,
}

impl CategoryFilter {
    pub fn matches(self, category: &EntityCategory) -> bool {
        matches!(
            (self, category),
            (CategoryFilter::All, _)
                | (CategoryFilter::Gene, EntityCategory::Gene)
                | (CategoryFilter::Clustering, EntityCategory::Clustering(_))
                | (CategoryFilter::Regulon, EntityCategory::Regulon)
                | (CategoryFilter::Annotation, EntityCategory::Annotation)
                | (CategoryFilter::Metric, EntityCategory::Metric)
        )
    }
}

impl FromStr for CategoryFilter {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "gene" | "genes" => Ok(CategoryFilter::Gene),
            "clustering" | "clusterings" | "cluster" => Ok(CategoryFilter::Clustering),
            "regulon" | "regulons" => Ok(CategoryFilter::Regulon),
            "annotation" | "annotations" => Ok(CategoryFilter::Annotation),
            "metric" | "metrics" => Ok(CategoryFilter::Metric),
            _ => Err(IndexError::UnknownFilter(s.to_string())),
        }
    }
}

/// The identity of an index entry: `(normalized_label, raw_label, category)`.
///
/// A key can only be built from a raw label, so the normalized form always
/// agrees with it. Field order defines the sort order of the index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IndexKey {
    normalized_label: String,
    raw_label: String,
    category: EntityCategory,
}

impl IndexKey {
    pub fn new(raw_label: impl Into<String>, category: EntityCategory) -> Self {
        let raw_label = raw_label.into();
        Self {
            normalized_label: normalize_label(&raw_label),
            raw_label,
            category,
        }
    }

    pub fn normalized_label(&self) -> &str {
        &self.normalized_label
    }

    pub fn raw_label(&self) -> &str {
        &self.raw_label
    }

    pub fn category(&self) -> &EntityCategory {
        &self.category
    }
}

/// A single search hit: the key it was stored under and its canonical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    #[serde(flatten)]
    key: IndexKey,
    canonical_value: String,
}

impl IndexEntry {
    pub fn new(key: IndexKey, canonical_value: impl Into<String>) -> Self {
        Self {
            key,
            canonical_value: canonical_value.into(),
        }
    }

    pub fn key(&self) -> &IndexKey {
        &self.key
    }

    pub fn normalized_label(&self) -> &str {
        self.key.normalized_label()
    }

    pub fn raw_label(&self) -> &str {
        self.key.raw_label()
    }

    pub fn category(&self) -> &EntityCategory {
        self.key.category()
    }

    pub fn canonical_value(&self) -> &str {
        &self.canonical_value
    }
}
