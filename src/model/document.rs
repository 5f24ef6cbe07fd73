//! Document-level types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::segment;

/// Text content extracted from a PDF document by an external decoder.
///
/// This is the input to every analysis operation. The decoder may or may
/// not preserve page boundaries in `full_text`; see [`crate::segment`] for
/// how the library approximates them when it does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Full extracted text, possibly containing page separator characters.
    pub full_text: String,

    /// Number of physical pages. Always at least 1 for a valid document.
    pub page_count: u32,

    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,
}

impl ExtractedDocument {
    /// Create a document from extracted text and a page count.
    ///
    /// Returns [`Error::InvalidPageCount`] when `page_count` is 0.
    pub fn new(full_text: impl Into<String>, page_count: u32) -> Result<Self> {
        if page_count == 0 {
            return Err(Error::InvalidPageCount(0));
        }
        Ok(Self {
            full_text: full_text.into(),
            page_count,
            metadata: Metadata::default(),
        })
    }

    /// Create a document with metadata attached.
    pub fn with_metadata(
        full_text: impl Into<String>,
        page_count: u32,
        metadata: Metadata,
    ) -> Result<Self> {
        let mut doc = Self::new(full_text, page_count)?;
        doc.metadata = metadata;
        Ok(doc)
    }

    /// Total character count of the extracted text.
    pub fn char_count(&self) -> usize {
        self.full_text.chars().count()
    }

    /// Get the trimmed text of a single page (1-indexed).
    ///
    /// Returns [`Error::PageOutOfRange`] when `page_num` is 0 or greater
    /// than the page count.
    pub fn page_text(&self, page_num: u32) -> Result<String> {
        if page_num == 0 || page_num > self.page_count {
            return Err(Error::PageOutOfRange(page_num, self.page_count));
        }
        let spans = segment::segment(&self.full_text, self.page_count)?;
        Ok(spans[(page_num - 1) as usize].text.trim().to_string())
    }
}

/// Document metadata reported by the decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Title to display, falling back to a placeholder.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled Document")
    }

    /// Author to display, falling back to a placeholder.
    pub fn display_author(&self) -> &str {
        self.author.as_deref().unwrap_or("Unknown")
    }
}
