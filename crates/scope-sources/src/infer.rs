//! Species inference from gene-symbol conventions.
//!
//! Each symbol votes for the species whose nomenclature it follows; the
//! species with the most votes wins. Ties resolve in the order dmel, hsap,
//! mmus. Datasets that declare their species never reach this code.

use regex::Regex;
use scope_core::Species;
use std::sync::LazyLock;

/// FlyBase annotation symbols: CG1234, CR5678.
static FLY_ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^C[GR]\d+$").expect("static regex"));

/// HGNC symbols are all upper case: BRCA1, TP53, HLA-DRA.
static HUMAN_SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9]*(-[A-Z0-9]+)*$").expect("static regex"));

/// MGI symbols are capitalised: Brca1, Trp53, H2-Ab1.
static MOUSE_SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z][a-z0-9]*(-[A-Za-z0-9]+)*$").expect("static regex"));

/// Guess the species of a dataset from its gene symbols.
///
/// Returns `Species::Other("unknown")` when no symbol follows a known
/// convention.
pub fn infer_species<S: AsRef<str>>(genes: &[S]) -> Species {
    let (mut dmel, mut hsap, mut mmus) = (0usize, 0usize, 0usize);
    for gene in genes {
        let gene = gene.as_ref();
        if FLY_ANNOTATION_RE.is_match(gene) {
            dmel += 1;
        } else if HUMAN_SYMBOL_RE.is_match(gene) {
            hsap += 1;
        } else if MOUSE_SYMBOL_RE.is_match(gene) {
            mmus += 1;
        }
    }

    let best = dmel.max(hsap).max(mmus);
    if best == 0 {
        Species::Other("unknown".to_string())
    } else if dmel == best {
        Species::Dmel
    } else if hsap == best {
        Species::Hsap
    } else {
        Species::Mmus
    }
}
