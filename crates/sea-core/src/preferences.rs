//! Persisted user preferences.
//!
//! A single JSON object next to the program:
//!
//! ```json
//! {
//!     "user_folder": "C:/Games/Sea/save"
//! }
//! ```
//!
//! Loaded once per run and passed to the operations that need it.

use std::path::{Path, PathBuf};

use sea_fs::{ConfigStore, io};
use serde::{Deserialize, Serialize};

use crate::layout::AppLayout;
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Folder holding the game's `gamevariable.xml`; empty when unset.
    #[serde(default)]
    pub user_folder: String,
}

impl Preferences {
    /// Load preferences, falling back to defaults when the file is missing.
    pub fn load(layout: &AppLayout) -> Result<Self> {
        Ok(ConfigStore::new().load_or_default(&layout.config_file())?)
    }

    pub fn save(&self, layout: &AppLayout) -> Result<()> {
        ConfigStore::new().save(&layout.config_file(), self)?;
        tracing::debug!(path = %layout.config_file().display(), "Saved preferences");
        Ok(())
    }

    /// The configured folder, if any.
    pub fn user_folder(&self) -> Option<&Path> {
        let folder = self.user_folder.trim();
        (!folder.is_empty()).then(|| Path::new(folder))
    }

    /// Point preferences at `folder` and persist them.
    ///
    /// The folder must be an existing directory; it is stored canonicalized.
    pub fn set_user_folder(&mut self, layout: &AppLayout, folder: &Path) -> Result<PathBuf> {
        if !folder.is_dir() {
            return Err(Error::FolderNotFound {
                path: folder.to_path_buf(),
            });
        }
        let folder = io::canonicalize(folder)?;
        self.user_folder = folder.to_string_lossy().into_owned();
        self.save(layout)?;
        Ok(folder)
    }

    /// The configured folder, which must exist.
    pub fn require_folder(&self) -> Result<&Path> {
        let folder = self.user_folder().ok_or(Error::FolderNotConfigured)?;
        if !folder.is_dir() {
            return Err(Error::FolderNotFound {
                path: folder.to_path_buf(),
            });
        }
        Ok(folder)
    }

    /// The game config in the configured folder, which must exist.
    pub fn require_target(&self) -> Result<PathBuf> {
        let folder = self.require_folder()?;
        let target = AppLayout::target_file(folder);
        if !target.is_file() {
            return Err(Error::TargetNotFound {
                folder: folder.to_path_buf(),
            });
        }
        Ok(target)
    }
}
