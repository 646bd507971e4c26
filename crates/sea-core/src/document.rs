//! Reading region and game documents with encoding detection.

use std::path::Path;

use sea_fs::encoding::{self, DecodedText, XML_PROLOG};
use sea_fs::io;

use crate::Result;

/// Text that marks a decode attempt as having produced a real document.
pub const DOCUMENT_MARKERS: [&str; 2] = [XML_PROLOG, "<WorldmapBookMark"];

/// Read and decode a document, guessing its encoding.
pub fn read_document(path: &Path) -> Result<DecodedText> {
    let bytes = io::read_bytes(path)?;
    let decoded = encoding::decode(&bytes, &DOCUMENT_MARKERS);
    tracing::debug!(
        path = %path.display(),
        encoding = decoded.encoding_name(),
        bom = decoded.bom,
        fallback = decoded.fallback,
        "Read document"
    );
    Ok(decoded)
}
