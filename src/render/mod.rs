//! Output rendering for extracted documents.

mod markdown;
mod summary;

pub use markdown::{to_markdown, MarkdownRenderer};
pub use summary::summarize;
