//! scope-sources — dataset backends and gene-table loading for scope-search.
//!
//! Each backend implements [`scope_core::EntitySource`] so the index builder
//! never sees how a dataset is stored. The mapping loaders build the
//! process-wide [`scope_core::SpeciesMappingResource`] once at startup.

pub mod error;
pub mod infer;
pub mod json;
pub mod mapping;
pub mod memory;

pub use error::SourceError;
pub use infer::infer_species;
pub use json::JsonDataset;
pub use mapping::{load_mapping_table, load_resource, parse_mapping_table};
pub use memory::InMemoryDataset;
