//! Markdown rendering for extracted documents.

use crate::analyze::StructureAnalyzer;
use crate::model::ExtractedDocument;

/// Convert an extracted document to Markdown.
///
/// Emits a metadata header (title, author, subject, page count, creation
/// date) followed by the text body, promoting heading-candidate lines to
/// `##` headings.
pub fn to_markdown(doc: &ExtractedDocument) -> String {
    let renderer = MarkdownRenderer::new();
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    analyzer: StructureAnalyzer,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new() -> Self {
        Self {
            analyzer: StructureAnalyzer::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &ExtractedDocument) -> String {
        let mut output = String::new();
        self.render_header(&mut output, doc);
        self.render_body(&mut output, &doc.full_text);
        output.trim().to_string()
    }

    fn render_header(&self, output: &mut String, doc: &ExtractedDocument) {
        let meta = &doc.metadata;
        output.push_str(&format!("# {}\n\n", meta.display_title()));

        if let Some(ref author) = meta.author {
            output.push_str(&format!("**Author:** {}\n\n", author));
        }
        if let Some(ref subject) = meta.subject {
            output.push_str(&format!("**Subject:** {}\n\n", subject));
        }
        output.push_str(&format!("**Pages:** {}\n\n", doc.page_count));
        if let Some(ref created) = meta.created {
            output.push_str(&format!("**Created:** {}\n\n", created.to_rfc3339()));
        }
        output.push_str("---\n\n");
    }

    fn render_body(&self, output: &mut String, text: &str) {
        for line in text.split('\n') {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                output.push('\n');
                continue;
            }
            if self.analyzer.is_heading_candidate(trimmed) {
                output.push_str(&format!("\n## {}\n\n", trimmed));
            } else {
                output.push_str(&format!("{}\n\n", trimmed));
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
