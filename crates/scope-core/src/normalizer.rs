//! Normalizer — folds raw entity labels into the case-insensitive lookup form.
//!
//! Every key in the index and every query term passes through
//! [`normalize_label`], so the two sides always agree on the folded form.

/// Case-fold a raw label.
///
/// Folding is Unicode full default case folding, so `"Straße"` and
/// `"STRASSE"` fold alike and final sigma folds like medial sigma.
/// Whitespace and punctuation are kept as-is: `"T-cell "` and `"t-cell"` are
/// different labels.
pub fn normalize_label(raw: &str) -> String {
    caseless::default_case_fold_str(raw)
}
