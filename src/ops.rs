//! Named-operation registry over decoded documents.
//!
//! A calling shell (editor plugin, CLI, service) usually exposes the
//! analysis operations behind a name → handler mapping. The registry here
//! is that mapping: constructed per use, owned by the caller, with no
//! process-wide state. Each operation reads one already-decoded
//! [`ExtractedDocument`] and returns either plain text or a JSON value.
//!
//! # Example
//!
//! ```
//! use textsift::ops::{OpRegistry, OpRequest};
//! use textsift::ExtractedDocument;
//!
//! fn main() -> textsift::Result<()> {
//!     let doc = ExtractedDocument::new("Some extracted text", 1)?;
//!     let registry = OpRegistry::with_defaults();
//!     let output = registry.run("analyze_structure", &OpRequest::new(&doc))?;
//!     println!("{}", output.to_display_string());
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::analyze;
use crate::error::{Error, Result};
use crate::model::ExtractedDocument;
use crate::render;
use crate::segment;

/// Input to a named operation.
#[derive(Debug, Clone)]
pub struct OpRequest<'a> {
    /// The decoded document to operate on.
    pub document: &'a ExtractedDocument,

    /// Search term, required by `search_text`.
    pub term: Option<&'a str>,

    /// One-based page number, required by `page_text`.
    pub page: Option<u32>,
}

impl<'a> OpRequest<'a> {
    /// Create a request for the given document.
    pub fn new(document: &'a ExtractedDocument) -> Self {
        Self {
            document,
            term: None,
            page: None,
        }
    }

    /// Attach a search term.
    pub fn with_term(mut self, term: &'a str) -> Self {
        self.term = Some(term);
        self
    }

    /// Attach a page number (1-indexed).
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Output of a named operation.
#[derive(Debug, Clone)]
pub enum OpOutput {
    /// User-facing text.
    Text(String),
    /// Structured result.
    Json(serde_json::Value),
}

impl OpOutput {
    /// Render the output for display: text as-is, JSON pretty-printed.
    pub fn to_display_string(&self) -> String {
        match self {
            OpOutput::Text(text) => text.clone(),
            OpOutput::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

/// Trait for named operations over a decoded document.
pub trait Operation: Send + Sync {
    /// Stable operation name used for registry lookup.
    fn name(&self) -> &str;

    /// One-line description for listings.
    fn description(&self) -> &str;

    /// Run the operation.
    fn run(&self, req: &OpRequest) -> Result<OpOutput>;
}

/// Registry mapping operation names to handlers.
///
/// Owned by the caller and constructed per use; nothing here is global.
pub struct OpRegistry {
    ops: HashMap<String, Arc<dyn Operation>>,
}

impl OpRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            ops: HashMap::new(),
        }
    }

    /// Create a registry with all built-in operations.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ExtractTextOp));
        registry.register(Arc::new(ExtractMetadataOp));
        registry.register(Arc::new(PageTextOp));
        registry.register(Arc::new(AnalyzeStructureOp));
        registry.register(Arc::new(ExtractTablesOp));
        registry.register(Arc::new(SearchTextOp));
        registry.register(Arc::new(ToMarkdownOp));
        registry.register(Arc::new(SummarizeOp));
        registry
    }

    /// Register an operation under its name.
    pub fn register(&mut self, op: Arc<dyn Operation>) {
        self.ops.insert(op.name().to_string(), op);
    }

    /// Get an operation by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Operation>> {
        self.ops.get(name).cloned()
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ops.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Run a named operation.
    ///
    /// Returns [`Error::UnknownOperation`] when no operation is
    /// registered under `name`.
    pub fn run(&self, name: &str, req: &OpRequest) -> Result<OpOutput> {
        let op = self
            .get(name)
            .ok_or_else(|| Error::UnknownOperation(name.to_string()))?;
        op.run(req)
    }
}

impl Default for OpRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn json_output<T: serde::Serialize>(value: &T) -> Result<OpOutput> {
    let value = serde_json::to_value(value).map_err(|e| Error::Other(e.to_string()))?;
    Ok(OpOutput::Json(value))
}

/// Return the full extracted text.
struct ExtractTextOp;

impl Operation for ExtractTextOp {
    fn name(&self) -> &str {
        "extract_text"
    }

    fn description(&self) -> &str {
        "Full extracted text of the document"
    }

    fn run(&self, req: &OpRequest) -> Result<OpOutput> {
        Ok(OpOutput::Text(req.document.full_text.clone()))
    }
}

/// Return document metadata as JSON.
struct ExtractMetadataOp;

impl Operation for ExtractMetadataOp {
    fn name(&self) -> &str {
        "extract_metadata"
    }

    fn description(&self) -> &str {
        "Document metadata (title, author, dates)"
    }

    fn run(&self, req: &OpRequest) -> Result<OpOutput> {
        json_output(&req.document.metadata)
    }
}

/// Return the text of one page.
struct PageTextOp;

impl Operation for PageTextOp {
    fn name(&self) -> &str {
        "page_text"
    }

    fn description(&self) -> &str {
        "Text of a single page (requires page)"
    }

    fn run(&self, req: &OpRequest) -> Result<OpOutput> {
        let page = req.page.ok_or(Error::MissingParameter("page"))?;
        Ok(OpOutput::Text(req.document.page_text(page)?))
    }
}

/// Run structure analysis and return the report as JSON.
struct AnalyzeStructureOp;

impl Operation for AnalyzeStructureOp {
    fn name(&self) -> &str {
        "analyze_structure"
    }

    fn description(&self) -> &str {
        "Aggregate statistics and document-type classification"
    }

    fn run(&self, req: &OpRequest) -> Result<OpOutput> {
        let report = analyze::analyze(&req.document.full_text, req.document.page_count)?;
        json_output(&report)
    }
}

/// Detect tables and return them as JSON.
struct ExtractTablesOp;

impl Operation for ExtractTablesOp {
    fn name(&self) -> &str {
        "extract_tables"
    }

    fn description(&self) -> &str {
        "Table-like structures per page"
    }

    fn run(&self, req: &OpRequest) -> Result<OpOutput> {
        let spans = segment::segment(&req.document.full_text, req.document.page_count)?;
        let tables = analyze::extract_tables(&spans);
        json_output(&tables)
    }
}

/// Search the document and return hits as JSON.
struct SearchTextOp;

impl Operation for SearchTextOp {
    fn name(&self) -> &str {
        "search_text"
    }

    fn description(&self) -> &str {
        "Literal case-insensitive search (requires term)"
    }

    fn run(&self, req: &OpRequest) -> Result<OpOutput> {
        let term = req.term.ok_or(Error::MissingParameter("term"))?;
        let spans = segment::segment(&req.document.full_text, req.document.page_count)?;
        let hits = analyze::search(&spans, term)?;
        json_output(&hits)
    }
}

/// Convert the document to Markdown.
struct ToMarkdownOp;

impl Operation for ToMarkdownOp {
    fn name(&self) -> &str {
        "to_markdown"
    }

    fn description(&self) -> &str {
        "Markdown rendition with metadata header"
    }

    fn run(&self, req: &OpRequest) -> Result<OpOutput> {
        Ok(OpOutput::Text(render::to_markdown(req.document)))
    }
}

/// Produce a short document summary.
struct SummarizeOp;

impl Operation for SummarizeOp {
    fn name(&self) -> &str {
        "summarize"
    }

    fn description(&self) -> &str {
        "Title, author, pages, and a content sample"
    }

    fn run(&self, req: &OpRequest) -> Result<OpOutput> {
        Ok(OpOutput::Text(render::summarize(req.document)))
    }
}
