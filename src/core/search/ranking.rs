//! Term-frequency scoring and snippet extraction.
//!
//! Scores each candidate document against a list of normalized terms,
//! collects context windows around the first occurrences of every term
//! and produces a ranked, capped result list. Pure and synchronous: no
//! I/O, no shared state, inputs are never mutated.
//!
//! # Scoring
//!
//! - every term found in the filename adds [`FILENAME_WEIGHT`] (once per term)
//! - every counted content occurrence adds 1, with at most
//!   [`MAX_OCCURRENCES_PER_TERM`] counted per term
//! - documents scoring 0 are dropped

use super::query::fold_case;
use crate::core::types::{Document, Match, SearchResult};

/// Score added per term found in the filename
pub const FILENAME_WEIGHT: u32 = 10;

/// Counted (and recorded) occurrences per term and document
pub const MAX_OCCURRENCES_PER_TERM: usize = 3;

/// Matches kept per result after aggregating all terms
pub const MAX_MATCHES_PER_RESULT: usize = 5;

/// Characters of context on each side of a match
pub const CONTEXT_RADIUS: usize = 50;

/// Characters of leading text in a preview
pub const PREVIEW_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Rank candidate documents against the given terms.
///
/// Results are ordered by descending score; equal scores keep the order
/// of `candidates`. At most `limit` results are returned.
pub fn rank_documents(terms: &[String], candidates: &[Document], limit: usize) -> Vec<SearchResult> {
    if terms.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = candidates
        .iter()
        .filter_map(|document| score_document(terms, document))
        .collect();

    // sort_by is stable: ties stay in candidate order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}

/// Score a single document, returning `None` when it is not searchable
/// or nothing matched.
pub fn score_document(terms: &[String], document: &Document) -> Option<SearchResult> {
    if !document.is_searchable() {
        return None;
    }
    let text = document.text.as_deref()?;

    let filename = fold_case(&document.filename);
    let mut score: u32 = terms
        .iter()
        .filter(|term| filename.contains(term.as_str()))
        .map(|_| FILENAME_WEIGHT)
        .sum();

    let folded = FoldedText::new(text);
    let mut matches = Vec::new();

    for term in terms {
        for (start, end) in folded.find(term).take(MAX_OCCURRENCES_PER_TERM) {
            score += 1;
            matches.push(Match {
                term: term.clone(),
                context: folded.context(start, end),
                position: start,
            });
        }
    }

    if score == 0 {
        return None;
    }

    matches.truncate(MAX_MATCHES_PER_RESULT);

    Some(SearchResult {
        id: document.id.clone(),
        filename: document.filename.clone(),
        size: document.size,
        mime_type: document.mime_type.clone(),
        created_at: document.created_at,
        score,
        matches,
        preview: preview(text),
    })
}

/// First [`PREVIEW_CHARS`] characters of `text` followed by `...`
pub fn preview(text: &str) -> String {
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    preview.push_str(ELLIPSIS);
    preview
}

/// Lower-cased copy of a text that can map match offsets back to
/// character offsets in the original.
///
/// Lower-casing is not length preserving (`'İ'` folds to two chars),
/// so every folded char remembers which original char produced it.
struct FoldedText<'a> {
    original: &'a str,
    folded: String,
    /// `(folded byte offset, original char index)` per folded char
    origins: Vec<(usize, usize)>,
    /// Byte offset of each original char, plus `original.len()`
    char_bytes: Vec<usize>,
}

impl<'a> FoldedText<'a> {
    fn new(original: &'a str) -> Self {
        let mut folded = String::with_capacity(original.len());
        let mut origins = Vec::with_capacity(original.len());
        let mut char_bytes = Vec::with_capacity(original.len() + 1);

        for (index, (byte, ch)) in original.char_indices().enumerate() {
            char_bytes.push(byte);
            for lower in ch.to_lowercase() {
                origins.push((folded.len(), index));
                folded.push(lower);
            }
        }
        char_bytes.push(original.len());

        Self {
            original,
            folded,
            origins,
            char_bytes,
        }
    }

    fn char_len(&self) -> usize {
        self.char_bytes.len() - 1
    }

    /// Original char index of the folded char containing `folded_byte`
    fn origin_of(&self, folded_byte: usize) -> usize {
        match self
            .origins
            .binary_search_by_key(&folded_byte, |&(byte, _)| byte)
        {
            Ok(i) => self.origins[i].1,
            Err(i) => self.origins[i.saturating_sub(1)].1,
        }
    }

    /// Non-overlapping occurrences of `term`, as original char ranges
    fn find<'s>(&'s self, term: &'s str) -> impl Iterator<Item = (usize, usize)> + 's {
        self.folded
            .match_indices(term)
            .filter(|(_, m)| !m.is_empty())
            .map(move |(byte, m)| {
                let start = self.origin_of(byte);
                let end = self.origin_of(byte + m.len() - 1) + 1;
                (start, end)
            })
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.original[self.char_bytes[start]..self.char_bytes[end]]
    }

    /// Window of [`CONTEXT_RADIUS`] chars around `start..end`, trimmed and
    /// marked with `...` on each side that was cut.
    fn context(&self, start: usize, end: usize) -> String {
        let len = self.char_len();
        let window_start = start.saturating_sub(CONTEXT_RADIUS);
        let window_end = (end + CONTEXT_RADIUS).min(len);

        let mut context = String::new();
        if window_start > 0 {
            context.push_str(ELLIPSIS);
        }
        context.push_str(self.slice(window_start, window_end).trim());
        if window_end < len {
            context.push_str(ELLIPSIS);
        }
        context
    }
}
