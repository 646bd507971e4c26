//! Locations of the files sea-selector reads and writes.
//!
//! Everything except the game's own folder lives next to the program: the
//! preferences file, the `data/` catalog, and the backup of the last file
//! that was overwritten.

use std::path::{Path, PathBuf};

use sea_fs::io;

use crate::Result;

/// Fixed file and directory names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPath {
    /// Persisted preferences (`config.json`)
    ConfigFile,
    /// Sea region catalog (`data`)
    DataDir,
    /// Copy of the game config taken before each write
    Backup,
    /// The game config inside the user folder (`gamevariable.xml`)
    Target,
}

impl AppPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigFile => "config.json",
            Self::DataDir => "data",
            Self::Backup => "gamevariable.xml.bak",
            Self::Target => "gamevariable.xml",
        }
    }
}

impl AsRef<Path> for AppPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for AppPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Paths derived from the application home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    home: PathBuf,
}

impl AppLayout {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Layout rooted at the directory holding the running executable.
    pub fn from_executable() -> Result<Self> {
        let exe = io::canonicalize(&std::env::current_exe()?)?;
        let home = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        tracing::debug!(home = %home.display(), "Resolved application home");
        Ok(Self { home })
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join(AppPath::ConfigFile)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.home.join(AppPath::DataDir)
    }

    pub fn backup_file(&self) -> PathBuf {
        self.home.join(AppPath::Backup)
    }

    /// The game config inside a user folder.
    pub fn target_file(folder: &Path) -> PathBuf {
        folder.join(AppPath::Target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths() {
        let layout = AppLayout::new("/opt/sea");
        assert_eq!(layout.config_file(), Path::new("/opt/sea/config.json"));
        assert_eq!(layout.data_dir(), Path::new("/opt/sea/data"));
        assert_eq!(layout.backup_file(), Path::new("/opt/sea/gamevariable.xml.bak"));
    }

    #[test]
    fn target_file_in_folder() {
        assert_eq!(
            AppLayout::target_file(Path::new("/games/save")),
            Path::new("/games/save/gamevariable.xml")
        );
    }

    #[test]
    fn from_executable_is_absolute() {
        let layout = AppLayout::from_executable().unwrap();
        assert!(layout.home().is_absolute());
    }

    #[test]
    fn app_path_display() {
        assert_eq!(AppPath::Target.to_string(), "gamevariable.xml");
    }
}
