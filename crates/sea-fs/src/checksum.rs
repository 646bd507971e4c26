//! SHA-256 checksum utilities
//!
//! Checksums use the canonical `sha256:<hex>` format. They are used to prove a
//! backup copy matches the file it was taken from.

use sha2::{Digest, Sha256};
use std::path::Path;

use crate::{Error, Result};

const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of raw bytes.
pub fn compute_bytes_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn compute_file_checksum(path: &Path) -> Result<String> {
    let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(compute_bytes_checksum(&content))
}
