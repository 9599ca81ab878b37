//! scope-search — search-space indexing for single-cell datasets.
//!
//! This crate re-exports the workspace layers so that integration tests and
//! the binary can import them from one place, and hosts the CLI driver.
//!
//! # Architecture
//!
//! ```text
//! scope-sources (datasets, gene tables)
//!        │
//!        ▼
//! scope-core: SearchIndexBuilder ──► SearchIndex ──► IndexCache
//! ```
//!
//! Gene tables are loaded once per process; each dataset load runs one
//! build and the resulting index is only read from then on.

pub mod cli;

pub use scope_core;
pub use scope_sources;
