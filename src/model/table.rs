//! Table match types.

use serde::{Deserialize, Serialize};

/// A table-like region found on one page.
///
/// Rows are kept in original line order; cells are trimmed and non-empty.
/// A page only yields a match when at least two qualifying rows survive
/// cell splitting, so a single stray aligned line never becomes a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMatch {
    /// One-based page number the table was found on.
    pub page: u32,

    /// Rows of trimmed cell text.
    pub rows: Vec<Vec<String>>,
}

impl TableMatch {
    /// Create a new table match.
    pub fn new(page: u32, rows: Vec<Vec<String>>) -> Self {
        Self { page, rows }
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Get a plain text representation, one tab-joined row per line.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
