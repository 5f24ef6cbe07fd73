//! Heuristic analysis over extracted text.
//!
//! Three independent, pure operations: aggregate structure analysis and
//! document-type classification ([`structure`]), table detection from
//! whitespace layout ([`tables`]), and literal text search ([`search`]).
//! All of them only read their inputs and allocate their outputs, so they
//! can run concurrently for different documents without coordination.

mod search;
mod structure;
mod tables;

pub use search::search;
pub use structure::{analyze, StructureAnalyzer};
pub use tables::{extract_tables, TableExtractor, TableExtractorConfig};
