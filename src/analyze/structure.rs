//! Document structure analysis.
//!
//! Computes aggregate statistics (characters, words, lines, paragraphs),
//! heading and table-line candidates, and a coarse document-type
//! classification — all from the raw extracted text. Everything here is a
//! heuristic over whitespace and keyword signals; no layout information is
//! used.

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{DocumentType, StructureReport};

/// Characters counted as "special" for [`StructureReport::has_special_characters`].
const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// How many digit runs a document needs, together with the keyword
/// "total", to classify as a financial report.
const FINANCIAL_DIGIT_RUN_THRESHOLD: usize = 50;

/// Analyzer holding the compiled patterns used by the heuristics.
pub struct StructureAnalyzer {
    numbering: Regex,
    whitespace_run: Regex,
    digit_run: Regex,
}

impl StructureAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self {
            numbering: Regex::new(r"^\d+\.?\s").unwrap(),
            whitespace_run: Regex::new(r"\s{3,}").unwrap(),
            digit_run: Regex::new(r"\d+").unwrap(),
        }
    }

    /// Analyze the full text of a document.
    ///
    /// Returns [`Error::InvalidPageCount`] when `page_count` is 0.
    pub fn analyze(&self, full_text: &str, page_count: u32) -> Result<StructureReport> {
        if page_count == 0 {
            return Err(Error::InvalidPageCount(0));
        }

        let lines: Vec<&str> = full_text
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .collect();
        let total_words = full_text.split_whitespace().count();
        let total_paragraphs = full_text
            .split("\n\n")
            .filter(|p| !p.trim().is_empty())
            .count();

        let potential_headings = lines
            .iter()
            .filter(|line| self.is_heading_candidate(line))
            .count();
        let potential_table_lines = lines
            .iter()
            .filter(|line| self.is_table_line_candidate(line))
            .count();

        let document_type = self.classify(full_text);
        log::debug!(
            "analyze: {} lines, {} words, classified as {}",
            lines.len(),
            total_words,
            document_type
        );

        Ok(StructureReport {
            page_count,
            total_characters: full_text.chars().count(),
            total_words,
            total_lines: lines.len(),
            total_paragraphs,
            average_words_per_page: (total_words as f64 / page_count as f64).round() as u32,
            potential_headings,
            potential_table_lines,
            document_type,
            has_numbers: full_text.chars().any(|c| c.is_ascii_digit()),
            has_special_characters: full_text
                .chars()
                .any(|c| SPECIAL_CHARACTERS.contains(c)),
        })
    }

    /// Whether a line is heuristically likely to be a section title:
    /// trimmed length strictly between 5 and 100 characters, and either
    /// entirely upper-case or carrying a leading "1." style number.
    pub fn is_heading_candidate(&self, line: &str) -> bool {
        let trimmed = line.trim();
        let len = trimmed.chars().count();
        if len <= 5 || len >= 100 {
            return false;
        }
        trimmed == trimmed.to_uppercase() || self.numbering.is_match(trimmed)
    }

    /// Whether a line's spacing pattern suggests tabular data: at least
    /// three tabs, or at least two runs of three or more consecutive
    /// whitespace characters.
    pub fn is_table_line_candidate(&self, line: &str) -> bool {
        line.matches('\t').count() >= 3 || self.whitespace_run.find_iter(line).count() >= 2
    }

    /// Classify the document from keyword signals.
    ///
    /// The rules form an ordered decision list; the first matching rule
    /// wins, so a document containing both academic and invoice signals
    /// classifies as an academic paper. Matching is case-insensitive
    /// substring search over the whole text.
    pub fn classify(&self, full_text: &str) -> DocumentType {
        let lower = full_text.to_lowercase();

        type Rule = (fn(&StructureAnalyzer, &str) -> bool, DocumentType);
        const RULES: &[Rule] = &[
            (
                |_, t| t.contains("abstract") && t.contains("references"),
                DocumentType::AcademicPaper,
            ),
            (
                |_, t| t.contains("invoice") || t.contains("bill") || t.contains("amount due"),
                DocumentType::Invoice,
            ),
            (
                |_, t| {
                    t.contains("resume")
                        || t.contains("curriculum vitae")
                        || t.contains("experience")
                },
                DocumentType::Resume,
            ),
            (
                |_, t| {
                    t.contains("contract")
                        || t.contains("agreement")
                        || t.contains("terms and conditions")
                },
                DocumentType::LegalDocument,
            ),
            (
                |_, t| t.contains("chapter") && t.contains("table of contents"),
                DocumentType::Book,
            ),
            (
                |this, t| {
                    this.digit_run.find_iter(t).count() > FINANCIAL_DIGIT_RUN_THRESHOLD
                        && t.contains("total")
                },
                DocumentType::FinancialReport,
            ),
        ];

        for (matches, label) in RULES {
            if matches(self, &lower) {
                return *label;
            }
        }
        DocumentType::GeneralDocument
    }
}

impl Default for StructureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze a document's full text with a default analyzer.
pub fn analyze(full_text: &str, page_count: u32) -> Result<StructureReport> {
    StructureAnalyzer::new().analyze(full_text, page_count)
}
