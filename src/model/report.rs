//! Structure report types.

use serde::{Deserialize, Serialize};

/// Aggregate statistics and classification for a document's text.
///
/// Produced by [`crate::analyze::analyze`]. Derived purely from the full
/// text and the page count; recomputed on each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureReport {
    /// Number of physical pages.
    pub page_count: u32,

    /// Total character count of the text.
    pub total_characters: usize,

    /// Count of whitespace-delimited words.
    pub total_words: usize,

    /// Count of non-blank lines.
    pub total_lines: usize,

    /// Count of blank-line-separated paragraphs.
    pub total_paragraphs: usize,

    /// Words per page, rounded to the nearest integer.
    pub average_words_per_page: u32,

    /// Lines heuristically judged likely to be section titles.
    pub potential_headings: usize,

    /// Lines whose spacing pattern suggests tabular data.
    pub potential_table_lines: usize,

    /// Coarse document classification from keyword signals.
    pub document_type: DocumentType,

    /// Whether any digit appears in the text.
    pub has_numbers: bool,

    /// Whether any character from a fixed punctuation/symbol set appears.
    pub has_special_characters: bool,
}

/// Coarse document type derived from keyword signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Contains both "abstract" and "references".
    AcademicPaper,
    /// Contains "invoice", "bill", or "amount due".
    Invoice,
    /// Contains "resume", "curriculum vitae", or "experience".
    Resume,
    /// Contains "contract", "agreement", or "terms and conditions".
    LegalDocument,
    /// Contains "chapter" and "table of contents".
    Book,
    /// Heavily numeric and contains "total".
    FinancialReport,
    /// No stronger signal matched.
    GeneralDocument,
}

impl DocumentType {
    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::AcademicPaper => "academic_paper",
            DocumentType::Invoice => "invoice",
            DocumentType::Resume => "resume",
            DocumentType::LegalDocument => "legal_document",
            DocumentType::Book => "book",
            DocumentType::FinancialReport => "financial_report",
            DocumentType::GeneralDocument => "general_document",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
