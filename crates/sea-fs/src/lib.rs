//! Filesystem layer for sea-selector
//!
//! Provides the byte-level pieces the pipeline is built from: locked atomic
//! writes, verified backup copies, checksums, text encoding detection, and a
//! serde-backed config store.

pub mod checksum;
pub mod config;
pub mod encoding;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use encoding::{DecodedText, decode, encode};
pub use error::{Error, Result};
