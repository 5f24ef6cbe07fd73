//! Data model for extracted-text analysis.
//!
//! These types carry the input to the analysis operations
//! ([`ExtractedDocument`], [`PageSpan`]) and their structured results
//! ([`StructureReport`], [`TableMatch`], [`SearchHit`]). All of them are
//! plain owned data, serializable with serde.

mod document;
mod page;
mod report;
mod search;
mod table;

pub use document::{ExtractedDocument, Metadata};
pub use page::PageSpan;
pub use report::{DocumentType, StructureReport};
pub use search::SearchHit;
pub use table::TableMatch;
