//! [`TestHome`] builder for sea-selector test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary application home (with `data/`) and a separate user folder.
///
/// # Example
///
/// ```rust,no_run
/// use sea_test_utils::TestHome;
///
/// let home = TestHome::new();
/// home.add_region("sea1", "<WorldmapBookMark/>");
/// home.write_target("<Game><WorldmapBookMark/></Game>");
/// home.write_preferences();
/// home.assert_target_contains("<WorldmapBookMark/>");
/// ```
pub struct TestHome {
    home: TempDir,
    user: TempDir,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    /// Create an empty home with a `data/` directory, and an empty user folder.
    pub fn new() -> Self {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(home.path().join("data")).unwrap();
        Self {
            home,
            user: TempDir::new().unwrap(),
        }
    }

    /// The application home directory.
    pub fn root(&self) -> &Path {
        self.home.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root().join("data")
    }

    /// The user folder that holds the game config.
    pub fn user_folder(&self) -> &Path {
        self.user.path()
    }

    pub fn target(&self) -> PathBuf {
        self.user_folder().join("gamevariable.xml")
    }

    pub fn backup(&self) -> PathBuf {
        self.root().join("gamevariable.xml.bak")
    }

    pub fn config_file(&self) -> PathBuf {
        self.root().join("config.json")
    }

    /// Write `data/<name>.xml`.
    pub fn add_region(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.data_dir().join(format!("{}.xml", name));
        fs::write(&path, content).unwrap();
        path
    }

    /// Write the game config into the user folder.
    pub fn write_target(&self, content: impl AsRef<[u8]>) {
        fs::write(self.target(), content).unwrap();
    }

    /// Point `config.json` at the user folder.
    pub fn write_preferences(&self) {
        self.write_preferences_for(self.user_folder());
    }

    /// Point `config.json` at an arbitrary folder.
    pub fn write_preferences_for(&self, folder: &Path) {
        let folder = folder.to_string_lossy().replace('\\', "\\\\");
        fs::write(
            self.config_file(),
            format!("{{\n    \"user_folder\": \"{}\"\n}}", folder),
        )
        .unwrap();
    }

    pub fn read_target(&self) -> Vec<u8> {
        fs::read(self.target()).unwrap()
    }

    pub fn read_backup(&self) -> Vec<u8> {
        fs::read(self.backup()).unwrap()
    }

    /// Assert that the game config, read as UTF-8, contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_target_contains(&self, content: &str) {
        let target = self.target();
        let text = fs::read_to_string(&target)
            .unwrap_or_else(|_| panic!("Could not read file: {}", target.display()));
        assert!(
            text.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            target.display(),
            content,
            text
        );
    }

    /// Assert that no backup has been written.
    ///
    /// # Panics
    /// Panics if the backup exists.
    pub fn assert_no_backup(&self) {
        assert!(
            !self.backup().exists(),
            "Expected file NOT to exist: {}",
            self.backup().display()
        );
    }
}
