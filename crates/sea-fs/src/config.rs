//! Serde-backed configuration loading and saving

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{Error, Result, io};

/// Indentation used for saved JSON, matching hand-edited config files.
const JSON_INDENT: &[u8] = b"    ";

/// Configuration store keyed on file extension.
///
/// Only `.json` files are supported; anything else is rejected with
/// [`Error::UnsupportedFormat`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        Self::check_format(path)?;
        let bytes = io::read_bytes(path)?;
        serde_json::from_slice(&bytes).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            format: "JSON".into(),
            message: e.to_string(),
        })
    }

    /// Load configuration, or `T::default()` if the file does not exist.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file missing, using defaults");
            return Ok(T::default());
        }
        self.load(path)
    }

    /// Save configuration to a file.
    ///
    /// Uses atomic write to prevent corruption.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        Self::check_format(path)?;

        let mut content = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut content, PrettyFormatter::with_indent(JSON_INDENT));
        value
            .serialize(&mut serializer)
            .map_err(|e| Error::ConfigSerialize {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            })?;

        io::write_atomic(path, &content)
    }

    fn check_format(path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if extension == "json" {
            Ok(())
        } else {
            Err(Error::UnsupportedFormat { extension })
        }
    }
}
