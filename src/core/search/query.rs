//! Query normalization.
//!
//! Turns a raw, user-typed query into the ordered list of terms the
//! ranking engine scans for. Tokens of two characters or fewer are
//! dropped as noise; punctuation is left attached, so `"sales."` does
//! not match `"sales"` in text.

/// Minimum number of characters a token needs to become a term
pub const MIN_TERM_CHARS: usize = 3;

/// Lower-case `text` one char at a time.
///
/// Unlike `str::to_lowercase` this has no context rules (a word-final
/// `'Σ'` becomes `'σ'`, not `'ς'`), so query terms, filenames and
/// document text all fold the same way.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Normalize a query string into search terms.
///
/// Lower-cases the whole query, splits on runs of whitespace and keeps
/// tokens of at least [`MIN_TERM_CHARS`] characters, in their original
/// left-to-right order.
///
/// # Examples
///
/// ```
/// use vault_search::core::search::normalize_query;
///
/// assert_eq!(normalize_query("Sales  REVENUE"), vec!["sales", "revenue"]);
/// assert!(normalize_query("a an to").is_empty());
/// assert!(normalize_query("   ").is_empty());
/// ```
pub fn normalize_query(query: &str) -> Vec<String> {
    fold_case(query)
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TERM_CHARS)
        .map(str::to_string)
        .collect()
}
