//! Integration tests for the analysis pipeline.

use textsift::{
    analyze, extract_tables, search, segment, DocumentAnalysis, DocumentType, Error,
    ExtractedDocument, PageSpan,
};

#[test]
fn segment_always_returns_page_count_spans() {
    let inputs = [
        ("", 1u32),
        ("", 7),
        ("short", 3),
        ("a\u{0C}b\u{0C}c", 2),
        ("no separators at all, just prose", 5),
    ];
    for (text, pages) in inputs {
        let spans = segment(text, pages).unwrap();
        assert_eq!(spans.len(), pages as usize, "input {:?}", (text, pages));
    }
}

#[test]
fn segment_fallback_reconstructs_text_exactly() {
    let text = "The quick brown fox jumps over the lazy dog. 갑을병정 1234567890.";
    for pages in 1..=10u32 {
        let spans = segment(text, pages).unwrap();
        let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, text, "pages = {}", pages);
    }
}

#[test]
fn analyze_empty_text_defaults() {
    let report = analyze("", 1).unwrap();
    assert_eq!(report.total_characters, 0);
    assert_eq!(report.total_words, 0);
    assert_eq!(report.document_type, DocumentType::GeneralDocument);
    assert!(!report.has_numbers);
    assert!(!report.has_special_characters);
}

#[test]
fn classifier_first_match_wins_over_later_rules() {
    // Contains both academic and invoice signals; the academic rule is
    // evaluated first and must win.
    let text = "ABSTRACT\nWe study invoice processing.\nAmount due is discussed.\nREFERENCES";
    let report = analyze(text, 1).unwrap();
    assert_eq!(report.document_type, DocumentType::AcademicPaper);
}

#[test]
fn table_extraction_matches_expected_grid() {
    let spans = segment("Name\tAge\tCity\nJohn\t25\tNew York\nJane\t30\tLos Angeles", 1).unwrap();
    let tables = extract_tables(&spans);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].row_count(), 3);
    assert_eq!(tables[0].rows[0], ["Name", "Age", "City"]);
    assert_eq!(tables[0].rows[1], ["John", "25", "New York"]);
    assert_eq!(tables[0].rows[2], ["Jane", "30", "Los Angeles"]);
}

#[test]
fn single_qualifying_row_is_below_threshold() {
    let spans = [PageSpan::new(0, "Only\tone\trow here\nand prose\nmore prose")];
    assert!(extract_tables(&spans).is_empty());
}

#[test]
fn search_escapes_metacharacters() {
    let spans = [PageSpan::new(0, "axb acb a.b")];
    let hits = search(&spans, "a.b").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].position, 8);
}

#[test]
fn search_empty_term_is_invalid() {
    let spans = [PageSpan::new(0, "text")];
    assert!(matches!(search(&spans, ""), Err(Error::EmptySearchTerm)));
}

#[test]
fn search_positions_index_the_term() {
    let text = "Pack my box with five dozen liquor jugs. BOX box BoX.";
    let spans = segment(text, 3).unwrap();
    let hits = search(&spans, "box").unwrap();
    assert!(!hits.is_empty());
    for hit in &hits {
        let span = &spans[(hit.page - 1) as usize];
        let chars: Vec<char> = span.text.chars().collect();
        let found: String = chars[hit.position..hit.position + 3].iter().collect();
        assert_eq!(found.to_lowercase(), "box");
    }
}

#[test]
fn operations_are_idempotent() {
    let text = "HEADINGS AND MORE\nName\tAge\tCity\nJohn\t25\tNY\nJane\t30\tLA\n\nProse.";
    let spans = segment(text, 2).unwrap();

    assert_eq!(analyze(text, 2).unwrap(), analyze(text, 2).unwrap());
    assert_eq!(extract_tables(&spans), extract_tables(&spans));
    assert_eq!(
        search(&spans, "jane").unwrap(),
        search(&spans, "jane").unwrap()
    );
}

#[test]
fn end_to_end_document_analysis() {
    let text = concat!(
        "QUARTERLY REVIEW\n",
        "Revenue figures follow.\n",
        "Region\tQ1\tQ2\tTotal\n",
        "North\t10\t12\t22\n",
        "South\t8\t9\t17\n",
        "\u{0C}",
        "Second page mentions revenue again.\n",
    );
    let doc = ExtractedDocument::new(text, 2).unwrap();
    let analysis = DocumentAnalysis::of(doc).unwrap();

    let report = analysis.structure().unwrap();
    assert_eq!(report.page_count, 2);
    assert!(report.potential_headings >= 1);
    assert!(report.potential_table_lines >= 3);

    let tables = analysis.tables();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].page, 1);

    let hits = analysis.search("revenue").unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].page, 1);
    assert_eq!(hits[1].page, 2);
}
