//! Command-line driver: load gene tables, open a dataset, build its index,
//! and answer lookups as JSON lines.

use anyhow::Context;
use clap::Parser;
use scope_core::config::Config;
use scope_core::{BuildOptions, CategoryFilter, IndexEntry, SearchIndexBuilder, Species};
use scope_sources::{load_resource, JsonDataset};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scope-search", about = "Build and query the search space of a dataset")]
pub struct Cli {
    /// Dataset description (JSON) to index.
    pub dataset: PathBuf,

    /// Terms to look up. Matching is exact and case-insensitive.
    pub terms: Vec<String>,

    /// Index the ortholog symbols of this species instead of the dataset's
    /// own entities (e.g. `hsap` or `mmus` for a `dmel` dataset).
    #[arg(long, value_name = "SPECIES")]
    pub cross_species: Option<String>,

    /// Only report hits of one category: all, gene, clustering, regulon,
    /// annotation, metric.
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Config file to use instead of ~/.config/scope-search/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print per-category entry counts before the lookups.
    #[arg(long)]
    pub stats: bool,

    /// Log at debug level (stderr).
    #[arg(long)]
    pub debug: bool,
}

#[derive(Serialize)]
struct TermHits<'a> {
    term: &'a str,
    hits: Vec<&'a IndexEntry>,
}

/// Run one CLI invocation, writing results to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to built-in config");
            Config::defaults()
        }),
    };
    let filter: CategoryFilter = cli.category.parse()?;

    let resource = load_resource(&config.mappings)?;
    let dataset = JsonDataset::open(&cli.dataset, &resource)?;
    let target = cli.cross_species.as_deref().map(Species::parse);

    let index = SearchIndexBuilder::new(&resource)
        .with_options(BuildOptions::from(&config.index))
        .build(&dataset, target.as_ref())
        .with_context(|| format!("indexing {}", dataset.id()))?;

    if cli.stats {
        writeln!(out, "{}", serde_json::to_string(&index.stats())?)?;
    }
    for term in &cli.terms {
        let hits = TermHits {
            term,
            hits: index.query_filtered(term, filter),
        };
        writeln!(out, "{}", serde_json::to_string(&hits)?)?;
    }
    Ok(())
}
