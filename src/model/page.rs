//! Page span types.

use serde::{Deserialize, Serialize};

/// The portion of extracted text attributed to one physical page.
///
/// Spans are produced by [`crate::segment::segment`] in physical page
/// order. When the decoder emitted no page separators the attribution is
/// proportional and therefore approximate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpan {
    /// Zero-based page index.
    pub index: u32,

    /// Text attributed to this page.
    pub text: String,
}

impl PageSpan {
    /// Create a new page span.
    pub fn new(index: u32, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// One-based page number, as reported to users.
    pub fn page_number(&self) -> u32 {
        self.index + 1
    }

    /// Whether the span holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
