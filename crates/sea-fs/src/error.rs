//! Error types for sea-fs

use std::path::PathBuf;

/// Result type for sea-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sea-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} config for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Text contains characters that cannot be written as {encoding}")]
    Unencodable { encoding: String },

    #[error("Copy of {source_path} at {copy_path} does not match the original")]
    ChecksumMismatch {
        source_path: PathBuf,
        copy_path: PathBuf,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
