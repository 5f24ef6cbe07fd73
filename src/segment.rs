//! Page segmentation for extracted text.
//!
//! Decoders do not reliably preserve page boundaries. When the text
//! contains enough page separator markers the split is authoritative;
//! otherwise the text is divided proportionally by character count.
//! The proportional path can misattribute text near page boundaries —
//! a known accuracy limitation, accepted as-is.

use crate::decoder::PAGE_SEPARATOR;
use crate::error::{Error, Result};
use crate::model::PageSpan;

/// Split extracted text into exactly `page_count` page spans.
///
/// Splits on [`PAGE_SEPARATOR`] first. If that yields at least
/// `page_count` parts, the first `page_count` parts are taken as
/// authoritative (separator characters are dropped, which is acceptable
/// lossy behavior — downstream heuristics only need approximate page
/// attribution). Otherwise the split is discarded and the text is divided
/// into `ceil(chars / page_count)`-character slices, whose concatenation
/// reproduces the input exactly.
///
/// Returns [`Error::InvalidPageCount`] when `page_count` is 0.
pub fn segment(full_text: &str, page_count: u32) -> Result<Vec<PageSpan>> {
    if page_count == 0 {
        return Err(Error::InvalidPageCount(0));
    }
    let wanted = page_count as usize;

    let parts: Vec<&str> = full_text.split(PAGE_SEPARATOR).collect();
    if parts.len() >= wanted {
        return Ok(parts
            .into_iter()
            .take(wanted)
            .enumerate()
            .map(|(i, text)| PageSpan::new(i as u32, text))
            .collect());
    }

    log::debug!(
        "segment: {} separator parts for {} pages, using proportional division",
        parts.len(),
        wanted
    );

    // Proportional fallback, sliced on character boundaries.
    let char_offsets: Vec<usize> = full_text.char_indices().map(|(i, _)| i).collect();
    let char_len = char_offsets.len();
    let chars_per_page = char_len.div_ceil(wanted);

    let byte_at = |char_pos: usize| -> usize {
        char_offsets
            .get(char_pos)
            .copied()
            .unwrap_or(full_text.len())
    };

    let mut spans = Vec::with_capacity(wanted);
    for i in 0..wanted {
        let start = byte_at((i * chars_per_page).min(char_len));
        let end = byte_at(((i + 1) * chars_per_page).min(char_len));
        spans.push(PageSpan::new(i as u32, &full_text[start..end]));
    }
    Ok(spans)
}
