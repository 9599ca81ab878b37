//! Static fixtures used across harnesses: gene symbols, gene tables, and
//! metadata records in the shapes real datasets ship.

use serde_json::{json, Value};

/// FlyBase annotation symbols for a small fly dataset.
pub const FLY_GENES: &[&str] = &["CG1", "CG2", "CG3", "CR4"];

/// Human → fly ortholog pairs.
pub const HSAP_TO_DMEL: &[(&str, &str)] = &[
    ("BRCA1", "dmel-brca2"),
    ("TP53", "p53"),
    ("MYC", "dm"),
    ("SOX2", "SoxN"),
];

/// Mouse → fly ortholog pairs.
pub const MMUS_TO_DMEL: &[(&str, &str)] = &[("Trp53", "p53"), ("Myc", "dm")];

/// Default fly table: annotation symbol → current symbol. `CG3` maps to
/// itself; `CG9` and `CG10` are not in [`FLY_GENES`], but `CG10`'s target is
/// `CR4`, which is.
pub const DMEL_DEFAULT: &[(&str, &str)] = &[
    ("CG1", "Adh"),
    ("CG2", "Act5C"),
    ("CG3", "CG3"),
    ("CG9", "ey"),
    ("CG10", "CR4"),
];

/// A Seurat clustering with two clusters.
pub fn seurat_meta() -> Value {
    json!({
        "clusterings": [{
            "name": "Seurat",
            "clusters": [{"description": "T-cell"}, {"description": "B-cell"}],
        }],
    })
}

/// Metadata with every section populated.
pub fn full_meta() -> Value {
    json!({
        "clusterings": [
            {"name": "Seurat", "clusters": [{"description": "T-cell"}, {"description": "B-cell"}]},
            {"name": "Leiden", "clusters": [{"description": "Neuron"}]},
            {"name": "Unclustered", "clusters": []},
        ],
        "annotations": [{"name": "Tissue"}, {"name": "Age"}],
        "metrics": [{"name": "nUMI"}, {"name": "nGene"}],
    })
}

/// Render a gene table as TSV text.
pub fn tsv(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(source, target)| format!("{source}\t{target}\n"))
        .collect()
}
