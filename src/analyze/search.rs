//! Literal text search across page spans.
//!
//! The search term is arbitrary user content, never a pattern language:
//! every regex metacharacter is escaped before matching. Matching is
//! case-insensitive and non-overlapping, scanning left to right.

use regex::RegexBuilder;

use crate::error::{Error, Result};
use crate::model::{PageSpan, SearchHit};

/// Characters of context captured either side of a match.
const CONTEXT_CHARS: usize = 50;

/// Find all occurrences of `term` across the given page spans.
///
/// Each hit records the one-based page number, the character offset of
/// the match within that page's span, and a context window of up to
/// [`CONTEXT_CHARS`] characters either side of the match, clamped to the
/// span and trimmed. Hits are ordered by page then position.
///
/// Returns [`Error::EmptySearchTerm`] when `term` is empty.
pub fn search(spans: &[PageSpan], term: &str) -> Result<Vec<SearchHit>> {
    if term.is_empty() {
        return Err(Error::EmptySearchTerm);
    }

    let pattern = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::Other(e.to_string()))?;

    let mut hits = Vec::new();
    for span in spans {
        let text = span.text.as_str();
        if text.is_empty() {
            continue;
        }

        // Map the regex engine's byte offsets to character offsets.
        let char_starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let char_at = |byte: usize| char_starts.partition_point(|&b| b < byte);
        let byte_of =
            |char_idx: usize| char_starts.get(char_idx).copied().unwrap_or(text.len());

        for m in pattern.find_iter(text) {
            let start_char = char_at(m.start());
            let end_char = char_at(m.end());

            let ctx_start = byte_of(start_char.saturating_sub(CONTEXT_CHARS));
            let ctx_end = byte_of(end_char + CONTEXT_CHARS);
            let context = text[ctx_start..ctx_end].trim();

            hits.push(SearchHit::new(span.page_number(), start_char, context));
        }
    }

    log::debug!("search: {} hits for term ({} chars)", hits.len(), term.len());
    Ok(hits)
}
