//! Gene-symbol table loading.
//!
//! Tables are two-column TSV files, `source<TAB>target`, one pair per line.
//! Blank lines and lines starting with `#` are ignored. Columns past the
//! second are ignored. When a source symbol repeats, the later line wins.

use crate::error::SourceError;
use scope_core::config::MappingsConfig;
use scope_core::{SpeciesMapping, SpeciesMappingResource};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

pub fn load_mapping_table(path: &Path) -> Result<SpeciesMapping, SourceError> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_mapping_table(path, &text)
}

/// Parse table text. `path` only labels errors.
pub fn parse_mapping_table(path: &Path, text: &str) -> Result<SpeciesMapping, SourceError> {
    let mut table = HashMap::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let malformed = |reason| SourceError::MalformedMapping {
            path: path.to_path_buf(),
            line: i + 1,
            reason,
        };
        let (source, rest) = line
            .split_once('\t')
            .ok_or_else(|| malformed("expected two tab-separated columns"))?;
        let target = rest.split('\t').next().unwrap_or_default();
        let (source, target) = (source.trim(), target.trim());
        if source.is_empty() || target.is_empty() {
            return Err(malformed("empty gene symbol"));
        }
        table.insert(source.to_string(), target.to_string());
    }
    Ok(SpeciesMapping::new(table))
}

/// Load every table named in `config` into one resource.
///
/// A configured file that does not exist is skipped with a warning; the
/// builder treats a missing table as "no entries". Unreadable or malformed
/// files are errors.
pub fn load_resource(config: &MappingsConfig) -> Result<SpeciesMappingResource, SourceError> {
    let mut resource = SpeciesMappingResource::new();

    for (pair, path) in config.ortholog_paths() {
        if !path.exists() {
            warn!(%pair, path = %path.display(), "ortholog table not found, skipping");
            continue;
        }
        let table = load_mapping_table(&path)?;
        info!(%pair, symbols = table.len(), "ortholog table loaded");
        resource = resource.with_orthologs(pair, table);
    }

    for (species, path) in config.default_paths() {
        if !path.exists() {
            warn!(%species, path = %path.display(), "default gene table not found, skipping");
            continue;
        }
        let table = load_mapping_table(&path)?;
        info!(%species, symbols = table.len(), "default gene table loaded");
        resource = resource.with_default(species, table);
    }

    Ok(resource)
}
