//! # textsift
//!
//! Heuristic structure analysis for text extracted from PDF documents.
//!
//! PDF decoding itself is an external capability: implement
//! [`PdfDecoder`] over your decoding library of choice, and feed the
//! resulting [`ExtractedDocument`] to the analysis operations here. The
//! library approximates per-page boundaries, computes aggregate structure
//! statistics with a coarse document-type classification, detects
//! table-like regions from whitespace layout, and searches literally
//! across pages.
//!
//! ## Quick Start
//!
//! ```
//! use textsift::{analyze, extract_tables, search, segment, ExtractedDocument};
//!
//! fn main() -> textsift::Result<()> {
//!     let doc = ExtractedDocument::new(
//!         "INTRODUCTION\nName\tAge\tCity\nJohn\t25\tNY\nJane\t30\tLA",
//!         1,
//!     )?;
//!
//!     let report = analyze(&doc.full_text, doc.page_count)?;
//!     println!("type: {}", report.document_type);
//!
//!     let spans = segment(&doc.full_text, doc.page_count)?;
//!     let tables = extract_tables(&spans);
//!     let hits = search(&spans, "jane")?;
//!     println!("{} tables, {} hits", tables.len(), hits.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Known accuracy limitation
//!
//! When the decoder emits no page separators, pages are approximated by
//! proportional character division, so per-page attribution of search
//! hits and tables near page boundaries is approximate. This mirrors the
//! behavior of common extraction libraries and is intentionally not
//! "improved" heuristically.

pub mod analyze;
pub mod decoder;
pub mod error;
pub mod model;
pub mod ops;
pub mod render;
pub mod segment;

// Re-export commonly used types
pub use analyze::{StructureAnalyzer, TableExtractor, TableExtractorConfig};
pub use decoder::{decode_file, PdfDecoder, PAGE_SEPARATOR};
pub use error::{Error, Result};
pub use model::{
    DocumentType, ExtractedDocument, Metadata, PageSpan, SearchHit, StructureReport, TableMatch,
};
pub use ops::{OpOutput, OpRegistry, OpRequest, Operation};
pub use render::{summarize, to_markdown};

/// Split extracted text into exactly `page_count` page spans.
///
/// See [`segment::segment`].
pub fn segment(full_text: &str, page_count: u32) -> Result<Vec<PageSpan>> {
    segment::segment(full_text, page_count)
}

/// Analyze a document's full text.
///
/// See [`analyze::analyze`].
pub fn analyze(full_text: &str, page_count: u32) -> Result<StructureReport> {
    analyze::analyze(full_text, page_count)
}

/// Extract table-like structures from page spans.
///
/// See [`analyze::extract_tables`].
pub fn extract_tables(spans: &[PageSpan]) -> Vec<TableMatch> {
    analyze::extract_tables(spans)
}

/// Search for a literal term across page spans.
///
/// See [`analyze::search`].
pub fn search(spans: &[PageSpan], term: &str) -> Result<Vec<SearchHit>> {
    analyze::search(spans, term)
}

/// A decoded document together with its segmented page spans.
///
/// Convenience wrapper that segments once and exposes every analysis
/// operation as a method.
///
/// # Example
///
/// ```
/// use textsift::{DocumentAnalysis, ExtractedDocument};
///
/// let doc = ExtractedDocument::new("page one\u{0C}page two", 2).unwrap();
/// let analysis = DocumentAnalysis::of(doc).unwrap();
/// assert_eq!(analysis.page_text(2).unwrap(), "page two");
/// ```
pub struct DocumentAnalysis {
    document: ExtractedDocument,
    spans: Vec<PageSpan>,
}

impl DocumentAnalysis {
    /// Segment a document and wrap it for analysis.
    pub fn of(document: ExtractedDocument) -> Result<Self> {
        let spans = segment::segment(&document.full_text, document.page_count)?;
        Ok(Self { document, spans })
    }

    /// The underlying document.
    pub fn document(&self) -> &ExtractedDocument {
        &self.document
    }

    /// The segmented page spans.
    pub fn spans(&self) -> &[PageSpan] {
        &self.spans
    }

    /// Trimmed text of a single page (1-indexed).
    pub fn page_text(&self, page_num: u32) -> Result<String> {
        if page_num == 0 || page_num > self.document.page_count {
            return Err(Error::PageOutOfRange(page_num, self.document.page_count));
        }
        Ok(self.spans[(page_num - 1) as usize].text.trim().to_string())
    }

    /// Aggregate structure report for the whole document.
    pub fn structure(&self) -> Result<StructureReport> {
        analyze::analyze(&self.document.full_text, self.document.page_count)
    }

    /// Table-like structures per page.
    pub fn tables(&self) -> Vec<TableMatch> {
        analyze::extract_tables(&self.spans)
    }

    /// Literal case-insensitive search across pages.
    pub fn search(&self, term: &str) -> Result<Vec<SearchHit>> {
        analyze::search(&self.spans, term)
    }

    /// Markdown rendition of the document.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.document)
    }

    /// Short human-readable summary.
    pub fn summary(&self) -> String {
        render::summarize(&self.document)
    }
}
