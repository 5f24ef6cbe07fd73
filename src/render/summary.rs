//! Concise document summaries.

use crate::model::ExtractedDocument;

/// Maximum characters of content sample included in a summary.
const SAMPLE_CHARS: usize = 500;

/// Produce a short human-readable summary of a document: a header line
/// followed by title, author, page count, and the first [`SAMPLE_CHARS`]
/// characters of content.
pub fn summarize(doc: &ExtractedDocument) -> String {
    let sample = sample_text(&doc.full_text, SAMPLE_CHARS);
    format!(
        "PDF Summary:\nTitle: {}\nAuthor: {}\nPages: {}\nContent Sample: {}",
        doc.metadata.display_title(),
        doc.metadata.display_author(),
        doc.page_count,
        sample
    )
}

/// Take the first `max_chars` characters of text, appending an ellipsis
/// when truncated.
fn sample_text(text: &str, max_chars: usize) -> String {
    let mut sample: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        sample.push_str("...");
    }
    sample
}
