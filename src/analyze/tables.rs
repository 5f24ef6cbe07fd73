//! Table extraction from whitespace layout.
//!
//! Scans each page's text for lines whose spacing pattern suggests
//! tabular data and groups them into a rectangular cell grid per page.
//! Qualifying lines are not required to be contiguous; original line
//! order is preserved.

use regex::Regex;

use crate::model::{PageSpan, TableMatch};

/// Table extractor configuration.
#[derive(Debug, Clone)]
pub struct TableExtractorConfig {
    /// Minimum tab characters for a line to qualify as a table row.
    pub min_tabs: usize,
    /// Minimum whitespace runs (of 3+ characters) for a line to qualify.
    pub min_space_runs: usize,
    /// Minimum cells a split row must keep to survive.
    pub min_cells: usize,
    /// Minimum surviving rows before a page yields a table.
    pub min_rows: usize,
}

impl Default for TableExtractorConfig {
    fn default() -> Self {
        Self {
            min_tabs: 2,
            min_space_runs: 2,
            min_cells: 2,
            min_rows: 2,
        }
    }
}

/// Detects table-like line groups in page spans.
pub struct TableExtractor {
    config: TableExtractorConfig,
    whitespace_run: Regex,
    cell_separator: Regex,
}

impl TableExtractor {
    /// Create a new extractor with default configuration.
    pub fn new() -> Self {
        Self::with_config(TableExtractorConfig::default())
    }

    /// Create a new extractor with custom configuration.
    pub fn with_config(config: TableExtractorConfig) -> Self {
        Self {
            config,
            whitespace_run: Regex::new(r"\s{3,}").unwrap(),
            cell_separator: Regex::new(r"\t|\s{3,}").unwrap(),
        }
    }

    /// Extract one table per page that carries enough qualifying rows.
    ///
    /// Output follows page order; absence of tables is represented by
    /// omission, never by an error.
    pub fn extract(&self, spans: &[PageSpan]) -> Vec<TableMatch> {
        let mut tables = Vec::new();

        for span in spans {
            let rows: Vec<Vec<String>> = span
                .text
                .split('\n')
                .filter(|line| self.is_table_row(line))
                .filter_map(|line| self.split_cells(line))
                .collect();

            if rows.len() >= self.config.min_rows {
                log::debug!(
                    "extract_tables: page {} yields {} rows",
                    span.page_number(),
                    rows.len()
                );
                tables.push(TableMatch::new(span.page_number(), rows));
            }
        }

        tables
    }

    /// Whether a line looks like a table row: enough tabs, or enough
    /// runs of consecutive whitespace.
    fn is_table_row(&self, line: &str) -> bool {
        line.matches('\t').count() >= self.config.min_tabs
            || self.whitespace_run.find_iter(line).count() >= self.config.min_space_runs
    }

    /// Split a qualifying line into trimmed, non-empty cells. Returns
    /// `None` when too few cells survive.
    fn split_cells(&self, line: &str) -> Option<Vec<String>> {
        let cells: Vec<String> = self
            .cell_separator
            .split(line)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();

        (cells.len() >= self.config.min_cells).then_some(cells)
    }
}

impl Default for TableExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract tables from page spans with a default extractor.
pub fn extract_tables(spans: &[PageSpan]) -> Vec<TableMatch> {
    TableExtractor::new().extract(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(index: u32, text: &str) -> PageSpan {
        PageSpan::new(index, text)
    }

    #[test]
    fn test_tab_separated_table() {
        let spans = [page(
            0,
            "Name\tAge\tCity\nJohn\t25\tNew York\nJane\t30\tLos Angeles",
        )];
        let tables = extract_tables(&spans);
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!(table.page, 1);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.rows[0], ["Name", "Age", "City"]);
        assert_eq!(table.rows[1], ["John", "25", "New York"]);
        assert_eq!(table.rows[2], ["Jane", "30", "Los Angeles"]);
    }

    #[test]
    fn test_space_run_separated_table() {
        let spans = [page(
            0,
            "Item     Price     Qty\nApple     1.20     3\nPear     0.80     5",
        )];
        let tables = extract_tables(&spans);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows[1], ["Apple", "1.20", "3"]);
    }

    #[test]
    fn test_single_row_is_not_a_table() {
        let spans = [page(0, "Name\tAge\tCity\nplain prose follows here")];
        let tables = extract_tables(&spans);
        assert!(tables.is_empty());
    }

    #[test]
    fn test_non_contiguous_rows_still_group() {
        let spans = [page(
            0,
            "Name\tAge\tCity\nSome interleaved prose.\nJane\t30\tLos Angeles",
        )];
        let tables = extract_tables(&spans);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].row_count(), 2);
    }

    #[test]
    fn test_rows_with_too_few_cells_dropped() {
        // The all-tab line qualifies but splits into zero cells.
        let spans = [page(0, "a\tb\tc\n\t\t\t\nd\te\tf")];
        let tables = extract_tables(&spans);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].row_count(), 2);
    }

    #[test]
    fn test_page_numbers_ascend() {
        let table_text = "a\tb\tc\nd\te\tf";
        let spans = [
            page(0, "no tables here"),
            page(1, table_text),
            page(2, table_text),
        ];
        let tables = extract_tables(&spans);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].page, 2);
        assert_eq!(tables[1].page, 3);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let spans = [page(0, "  Name \t Age \n  John \t 25 ")];
        let tables = extract_tables(&spans);
        // One tab per line is below the tab threshold, but the leading
        // double space is not a 3+ run either — no table.
        assert!(tables.is_empty());

        let spans = [page(0, "Name\t Age \tCity\nJohn\t 25 \tNY")];
        let tables = extract_tables(&spans);
        assert_eq!(tables[0].rows[0], ["Name", "Age", "City"]);
        assert_eq!(tables[0].rows[1], ["John", "25", "NY"]);
    }
}
