//! Configuration types for scope-search.
//!
//! [`Config::load`] reads `~/.config/scope-search/config.toml`, creating it
//! with hardcoded defaults if it does not yet exist. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in tests).

use crate::species::{OrthologPair, Species};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[mappings]
dir          = "data/mappings"
hsap_to_dmel = "hsap_to_dmel.tsv"
mmus_to_dmel = "mmus_to_dmel.tsv"

[mappings.defaults]
dmel = "dmel.tsv"

[index]
strict_cross_species = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/scope-search/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mappings: MappingsConfig,
    #[serde(default)]
    pub index: IndexConfig,
}

/// `[mappings]` section: where the gene-symbol tables live.
///
/// Relative file names are resolved against `dir`.
#[derive(Debug, Clone, Deserialize)]
pub struct MappingsConfig {
    #[serde(default = "default_mappings_dir")]
    pub dir: PathBuf,
    #[serde(default)]
    pub hsap_to_dmel: Option<String>,
    #[serde(default)]
    pub mmus_to_dmel: Option<String>,
    /// Species code → default table file.
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
}

fn default_mappings_dir() -> PathBuf { PathBuf::from("data/mappings") }

impl Default for MappingsConfig {
    fn default() -> Self {
        Self {
            dir: default_mappings_dir(),
            hsap_to_dmel: None,
            mmus_to_dmel: None,
            defaults: BTreeMap::new(),
        }
    }
}

impl MappingsConfig {
    /// Configured ortholog table paths, resolved against `dir`.
    pub fn ortholog_paths(&self) -> Vec<(OrthologPair, PathBuf)> {
        OrthologPair::ALL
            .into_iter()
            .filter_map(|pair| {
                let file = match pair {
                    OrthologPair::HsapToDmel => self.hsap_to_dmel.as_ref(),
                    OrthologPair::MmusToDmel => self.mmus_to_dmel.as_ref(),
                }?;
                Some((pair, self.dir.join(file)))
            })
            .collect()
    }

    /// Configured default table paths per species, resolved against `dir`.
    pub fn default_paths(&self) -> Vec<(Species, PathBuf)> {
        self.defaults
            .iter()
            .map(|(code, file)| (Species::parse(code), self.dir.join(file)))
            .collect()
    }
}

/// `[index]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexConfig {
    /// Treat an unsupported cross-species pair as an error instead of
    /// building an empty index.
    #[serde(default)]
    pub strict_cross_species: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/scope-search/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit config file, layered on top of the built-in defaults.
    /// The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("scope-search")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
