//! Species codes, gene-symbol mappings, and the process-wide mapping resource.
//!
//! [`SpeciesMappingResource`] is loaded once at startup and handed to every
//! builder by reference. Tables live behind an `Arc`, so a [`SpeciesMapping`]
//! clone never copies symbols and concurrent builds can read the same tables
//! without locking.

use phf::phf_map;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// Alias → canonical species code.
static SPECIES_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "hsap" => "hsap",
    "human" => "hsap",
    "homo_sapiens" => "hsap",
    "homo sapiens" => "hsap",
    "mmus" => "mmus",
    "mouse" => "mmus",
    "mus_musculus" => "mmus",
    "mus musculus" => "mmus",
    "dmel" => "dmel",
    "fly" => "dmel",
    "drosophila_melanogaster" => "dmel",
    "drosophila melanogaster" => "dmel",
};

/// A dataset species, identified by its short code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    /// Homo sapiens.
    Hsap,
    /// Mus musculus.
    Mmus,
    /// Drosophila melanogaster.
    Dmel,
    /// Any other species, stored as its lowercased code.
    Other(String),
}

impl Species {
    /// Parse a species code or common alias. Never fails: unknown codes
    /// become [`Species::Other`].
    pub fn parse(code: &str) -> Self {
        let code = code.trim().to_lowercase();
        match SPECIES_ALIASES.get(code.as_str()).copied() {
            Some("hsap") => Species::Hsap,
            Some("mmus") => Species::Mmus,
            Some("dmel") => Species::Dmel,
            _ => Species::Other(code),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Species::Hsap => "hsap",
            Species::Mmus => "mmus",
            Species::Dmel => "dmel",
            Species::Other(code) => code,
        }
    }
}

impl FromStr for Species {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Species::parse(s))
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Species {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// SpeciesMapping
// ---------------------------------------------------------------------------

/// A directed gene-symbol table from one species to another.
///
/// The mapping may be partial (not every symbol has an entry) and
/// non-injective (several sources may share a target).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesMapping {
    table: Arc<HashMap<String, String>>,
}

impl SpeciesMapping {
    pub fn new(table: HashMap<String, String>) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.table.get(symbol).map(String::as_str)
    }

    /// Source-side symbols, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// `(source, target)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for SpeciesMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// OrthologPair
// ---------------------------------------------------------------------------

/// The `(cross-species target, dataset species)` pairs that have an ortholog
/// table. Any other pair is unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrthologPair {
    HsapToDmel,
    MmusToDmel,
}

impl OrthologPair {
    pub const ALL: [OrthologPair; 2] = [OrthologPair::HsapToDmel, OrthologPair::MmusToDmel];

    /// Select the table for searching `target` symbols in a `species` dataset.
    pub fn select(target: &Species, species: &Species) -> Option<Self> {
        match (target, species) {
            (Species::Hsap, Species::Dmel) => Some(OrthologPair::HsapToDmel),
            (Species::Mmus, Species::Dmel) => Some(OrthologPair::MmusToDmel),
            _ => None,
        }
    }

    pub fn target(self) -> Species {
        match self {
            OrthologPair::HsapToDmel => Species::Hsap,
            OrthologPair::MmusToDmel => Species::Mmus,
        }
    }

    pub fn species(self) -> Species {
        Species::Dmel
    }
}

impl std::fmt::Display for OrthologPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_to_{}", self.target(), self.species())
    }
}

// ---------------------------------------------------------------------------
// SpeciesMappingResource
// ---------------------------------------------------------------------------

/// Read-only gene-symbol tables shared by every build in the process.
///
/// Holds one ortholog table per supported [`OrthologPair`] and a default
/// table per dataset species. Either kind may be absent.
#[derive(Debug, Clone, Default)]
pub struct SpeciesMappingResource {
    orthologs: HashMap<OrthologPair, SpeciesMapping>,
    defaults: HashMap<Species, SpeciesMapping>,
}

impl SpeciesMappingResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orthologs(mut self, pair: OrthologPair, mapping: SpeciesMapping) -> Self {
        self.orthologs.insert(pair, mapping);
        self
    }

    pub fn with_default(mut self, species: Species, mapping: SpeciesMapping) -> Self {
        self.defaults.insert(species, mapping);
        self
    }

    pub fn orthologs(&self, pair: OrthologPair) -> Option<&SpeciesMapping> {
        self.orthologs.get(&pair)
    }

    pub fn default_table(&self, species: &Species) -> Option<&SpeciesMapping> {
        self.defaults.get(species)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
