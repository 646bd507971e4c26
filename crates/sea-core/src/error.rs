//! Error types for sea-core

use std::path::PathBuf;

/// Result type for sea-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sea-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No region name was given
    #[error("No sea region selected")]
    NoSelection,

    /// Region name cannot be used as a file name
    #[error("Invalid sea region name '{name}': {reason}")]
    InvalidRegionName { name: String, reason: String },

    /// Region file is missing from the catalog
    #[error("Sea region file does not exist: {}", path.display())]
    RegionNotFound { name: String, path: PathBuf },

    /// Region file has no bookmark block
    #[error("No valid WorldmapBookMark block found in sea region '{name}'")]
    SourceBlockMissing { name: String },

    /// Region file is not well-formed XML
    #[error("Sea region '{name}' is malformed: {source}")]
    MalformedRegion {
        name: String,
        #[source]
        source: sea_blocks::Error,
    },

    /// No user folder has been chosen yet
    #[error("User folder is not configured")]
    FolderNotConfigured,

    /// The configured user folder does not exist
    #[error("User folder does not exist: {}", path.display())]
    FolderNotFound { path: PathBuf },

    /// The game config file is missing from the user folder
    #[error("gamevariable.xml does not exist in {}", folder.display())]
    TargetNotFound { folder: PathBuf },

    /// The game config file has no bookmark block
    #[error("No WorldmapBookMark block found in {}", path.display())]
    TargetBlockMissing { path: PathBuf },

    /// The game config file is not well-formed XML
    #[error("{} is malformed: {source}", path.display())]
    MalformedTarget {
        path: PathBuf,
        #[source]
        source: sea_blocks::Error,
    },

    /// Restore was requested but no backup exists
    #[error("No backup found at {}", path.display())]
    BackupNotFound { path: PathBuf },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from sea-fs
    #[error(transparent)]
    Fs(#[from] sea_fs::Error),

    /// Block error from sea-blocks
    #[error(transparent)]
    Blocks(#[from] sea_blocks::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
