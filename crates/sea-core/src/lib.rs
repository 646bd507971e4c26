//! Core layer for sea-selector
//!
//! Ties the filesystem and block crates into the user-facing operations:
//!
//! - **Layout**: where the config, catalog, and backup live relative to the program
//! - **Preferences**: the persisted user folder, loaded once and passed explicitly
//! - **Catalog**: scanning, filtering, and loading sea region files
//! - **Apply**: splicing a region's bookmark block into `gamevariable.xml`
//! - **Status**: a snapshot of everything above
//!
//! # Architecture
//!
//! ```text
//!            sea-cli
//!               |
//!           sea-core
//!               |
//!        +------+------+
//!        |             |
//!     sea-fs       sea-blocks
//! ```

pub mod apply;
pub mod catalog;
pub mod document;
pub mod error;
pub mod layout;
pub mod preferences;
pub mod status;

pub use apply::{ApplyOptions, ApplyReport, RestoreReport, apply_region, restore_backup};
pub use catalog::{Catalog, Region, RegionEntry, filter_regions, validate_region_name};
pub use document::{DOCUMENT_MARKERS, read_document};
pub use error::{Error, Result};
pub use layout::{AppLayout, AppPath};
pub use preferences::Preferences;
pub use status::{Status, collect_status};
