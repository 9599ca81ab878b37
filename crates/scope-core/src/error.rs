//! Error types for index construction and lookup.

use crate::species::Species;
use thiserror::Error;

/// Errors raised while building or querying a search index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A metadata record is missing a required field or has the wrong shape.
    /// The dataset cannot be indexed until the record is corrected.
    #[error("malformed metadata at {path}: field `{field}` {reason}")]
    Format {
        path: String,
        field: &'static str,
        reason: &'static str,
    },
    /// Cross-species lookup was requested for a pair with no ortholog table.
    /// Only raised when strict cross-species mode is enabled.
    #[error("cross-species search from {target} onto {species} is not supported")]
    UnsupportedPair { target: Species, species: Species },
    #[error("unknown category filter: {0:?}")]
    UnknownFilter(String),
    #[error("label index construction failed: {0}")]
    Fst(#[from] fst::Error),
}

pub type IndexResult<T> = Result<T, IndexError>;
