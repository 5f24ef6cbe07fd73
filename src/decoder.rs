//! PDF decoder abstraction layer.
//!
//! Provides a trait-based seam for the external capability that turns raw
//! PDF bytes into extracted text, isolating the concrete decoding library
//! from the analysis logic. The library never parses PDF binary data
//! itself.

use std::path::Path;

use crate::error::Result;
use crate::model::ExtractedDocument;

/// Page separator character emitted between pages by common text
/// extractors (form feed). Decoders that preserve page boundaries should
/// use this convention so that [`crate::segment::segment`] can take the
/// marker-based path.
pub const PAGE_SEPARATOR: char = '\u{0C}';

/// Abstract interface for PDF text decoding.
///
/// Implementations must report a `page_count` of at least 1 for any
/// document they successfully decode, and should surface decoding
/// failures as [`crate::Error::Decode`] rather than absorbing them.
pub trait PdfDecoder {
    /// Decode raw PDF bytes into extracted text, page count, and metadata.
    fn decode(&self, data: &[u8]) -> Result<ExtractedDocument>;

    /// Name of the decoder, for diagnostics.
    fn name(&self) -> &str;
}

/// Read a file and decode it with the given decoder.
pub fn decode_file<P: AsRef<Path>>(
    decoder: &dyn PdfDecoder,
    path: P,
) -> Result<ExtractedDocument> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    log::debug!(
        "decoding {} ({} bytes) with {}",
        path.display(),
        data.len(),
        decoder.name()
    );
    decoder.decode(&data)
}
