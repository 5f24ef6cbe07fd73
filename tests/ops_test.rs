//! Integration tests for the operation registry.

use std::sync::Arc;

use textsift::ops::{OpOutput, OpRegistry, OpRequest, Operation};
use textsift::{Error, ExtractedDocument, Result};

/// Mock operation for testing registration.
struct MockOp {
    name: &'static str,
}

impl Operation for MockOp {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "mock operation"
    }

    fn run(&self, _req: &OpRequest) -> Result<OpOutput> {
        Ok(OpOutput::Text(format!("ran {}", self.name)))
    }
}

fn sample_doc() -> ExtractedDocument {
    let text = concat!(
        "ANNUAL OVERVIEW\n",
        "Name\tAge\tCity\n",
        "John\t25\tNew York\n",
        "Jane\t30\tLos Angeles\n",
        "\u{0C}",
        "Second page prose about Jane.\n",
    );
    ExtractedDocument::new(text, 2).unwrap()
}

#[test]
fn empty_registry_knows_nothing() {
    let registry = OpRegistry::new();
    assert!(!registry.contains("analyze_structure"));
    assert!(registry.names().is_empty());
}

#[test]
fn custom_operation_registration() {
    let mut registry = OpRegistry::new();
    registry.register(Arc::new(MockOp { name: "mock" }));

    assert!(registry.contains("mock"));
    let doc = sample_doc();
    let output = registry.run("mock", &OpRequest::new(&doc)).unwrap();
    assert_eq!(output.to_display_string(), "ran mock");
}

#[test]
fn registration_overwrites_same_name() {
    let mut registry = OpRegistry::with_defaults();
    let before = registry.names().len();
    registry.register(Arc::new(MockOp {
        name: "extract_text",
    }));
    assert_eq!(registry.names().len(), before);

    let doc = sample_doc();
    let output = registry.run("extract_text", &OpRequest::new(&doc)).unwrap();
    assert_eq!(output.to_display_string(), "ran extract_text");
}

#[test]
fn analyze_structure_reports_json() {
    let registry = OpRegistry::with_defaults();
    let doc = sample_doc();
    let output = registry
        .run("analyze_structure", &OpRequest::new(&doc))
        .unwrap();
    let OpOutput::Json(value) = output else {
        panic!("expected JSON output");
    };
    assert_eq!(value["page_count"], 2);
    assert_eq!(value["document_type"], "general_document");
}

#[test]
fn search_text_finds_hits_across_pages() {
    let registry = OpRegistry::with_defaults();
    let doc = sample_doc();
    let output = registry
        .run("search_text", &OpRequest::new(&doc).with_term("jane"))
        .unwrap();
    let OpOutput::Json(value) = output else {
        panic!("expected JSON output");
    };
    let hits = value.as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["page"], 1);
    assert_eq!(hits[1]["page"], 2);
}

#[test]
fn page_text_returns_requested_page() {
    let registry = OpRegistry::with_defaults();
    let doc = sample_doc();
    let output = registry
        .run("page_text", &OpRequest::new(&doc).with_page(2))
        .unwrap();
    assert_eq!(
        output.to_display_string(),
        "Second page prose about Jane."
    );
}

#[test]
fn page_text_out_of_range() {
    let registry = OpRegistry::with_defaults();
    let doc = sample_doc();
    let result = registry.run("page_text", &OpRequest::new(&doc).with_page(9));
    assert!(matches!(result, Err(Error::PageOutOfRange(9, 2))));
}

#[test]
fn summarize_mentions_page_count() {
    let registry = OpRegistry::with_defaults();
    let doc = sample_doc();
    let output = registry.run("summarize", &OpRequest::new(&doc)).unwrap();
    assert!(output.to_display_string().contains("Pages: 2"));
}

#[test]
fn to_markdown_promotes_headings() {
    let registry = OpRegistry::with_defaults();
    let doc = sample_doc();
    let output = registry.run("to_markdown", &OpRequest::new(&doc)).unwrap();
    assert!(output.to_display_string().contains("## ANNUAL OVERVIEW"));
}
