//! scope-core — search-space indexing for single-cell datasets.
//!
//! This crate turns the heterogeneous entities of a loaded dataset (genes,
//! cluster labels, regulons, annotations, metrics) into one case-insensitive
//! lookup index.
//!
//! # Architecture
//!
//! ```text
//! EntitySource ──┐
//!                ├──► SearchIndexBuilder ──► SearchIndex ──► IndexCache
//! SpeciesMappingResource ──┘
//! ```
//!
//! The builder is the only mutable stage. A finished [`SearchIndex`] is
//! immutable and can be shared across threads behind an `Arc`.

pub mod builder;
pub mod cache;
pub mod config;
pub mod error;
pub mod index;
pub mod metadata;
pub mod normalizer;
pub mod source;
pub mod species;
pub mod types;

pub use builder::{BuildOptions, BuildState, SearchIndexBuilder};
pub use cache::{CacheKey, IndexCache};
pub use error::{IndexError, IndexResult};
pub use index::{IndexStats, SearchIndex};
pub use metadata::{ClusteringRecord, MetaData};
pub use source::{EntitySource, RegulonMatrix};
pub use species::{OrthologPair, Species, SpeciesMapping, SpeciesMappingResource};
pub use types::{CategoryFilter, EntityCategory, IndexEntry, IndexKey};
