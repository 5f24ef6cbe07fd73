//! Search hit types.

use serde::{Deserialize, Serialize};

/// A single occurrence of a search term within a page span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// One-based page number the occurrence was found on.
    pub page: u32,

    /// Character offset of the match within that page's span.
    pub position: usize,

    /// Surrounding text, up to 50 characters either side of the match,
    /// trimmed of leading and trailing whitespace.
    pub context: String,
}

impl SearchHit {
    /// Create a new search hit.
    pub fn new(page: u32, position: usize, context: impl Into<String>) -> Self {
        Self {
            page,
            position,
            context: context.into(),
        }
    }
}
