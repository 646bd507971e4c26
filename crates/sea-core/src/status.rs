//! A read-only snapshot of where everything stands.

use std::path::PathBuf;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::document::read_document;
use crate::layout::AppLayout;
use crate::preferences::Preferences;
use crate::Result;

#[derive(Debug, Clone, Serialize)]
pub struct Status {
    pub home: PathBuf,
    pub data_dir: PathBuf,
    /// Number of valid regions in the catalog.
    pub regions: usize,
    pub user_folder: Option<PathBuf>,
    pub folder_exists: bool,
    pub target: Option<PathBuf>,
    pub target_exists: bool,
    /// Whether the game config holds a well-formed bookmark block.
    pub target_has_bookmark: bool,
    /// Encoding the game config was detected as.
    pub target_encoding: Option<String>,
    pub backup: PathBuf,
    pub backup_exists: bool,
}

/// Gather the status without changing anything on disk.
///
/// Problems with the user folder or game config are reported as flags rather
/// than errors; only a failure to list the catalog is an error.
pub fn collect_status(layout: &AppLayout, prefs: &Preferences) -> Result<Status> {
    let regions = Catalog::from_layout(layout).scan()?.len();

    let user_folder = prefs.user_folder().map(|folder| folder.to_path_buf());
    let folder_exists = user_folder.as_deref().is_some_and(|folder| folder.is_dir());
    let target = user_folder.as_deref().map(AppLayout::target_file);
    let target_exists = target.as_deref().is_some_and(|target| target.is_file());

    let mut target_has_bookmark = false;
    let mut target_encoding = None;
    if target_exists && let Some(path) = target.as_deref() {
        match read_document(path) {
            Ok(document) => {
                target_has_bookmark = sea_blocks::has_block(&document.text, sea_blocks::BOOKMARK_TAG);
                target_encoding = Some(document.encoding_name().to_string());
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Cannot read target"),
        }
    }

    let backup = layout.backup_file();
    let backup_exists = backup.is_file();

    Ok(Status {
        home: layout.home().to_path_buf(),
        data_dir: layout.data_dir(),
        regions,
        user_folder,
        folder_exists,
        target,
        target_exists,
        target_has_bookmark,
        target_encoding,
        backup,
        backup_exists,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_home() {
        let home = TempDir::new().unwrap();
        let layout = AppLayout::new(home.path());

        let status = collect_status(&layout, &Preferences::default()).unwrap();
        assert_eq!(status.regions, 0);
        assert!(status.user_folder.is_none());
        assert!(!status.folder_exists);
        assert!(status.target.is_none());
        assert!(!status.target_has_bookmark);
        assert!(!status.backup_exists);
    }

    #[test]
    fn configured_folder_with_target() {
        let home = TempDir::new().unwrap();
        let save = TempDir::new().unwrap();
        let layout = AppLayout::new(home.path());
        fs::write(
            save.path().join("gamevariable.xml"),
            "<?xml version=\"1.0\"?>\n<Game><WorldmapBookMark/></Game>",
        )
        .unwrap();
        let prefs = Preferences {
            user_folder: save.path().to_string_lossy().into_owned(),
        };

        let status = collect_status(&layout, &prefs).unwrap();
        assert!(status.folder_exists);
        assert!(status.target_exists);
        assert!(status.target_has_bookmark);
        assert_eq!(status.target_encoding.as_deref(), Some("UTF-8"));

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["target_has_bookmark"], true);
        assert_eq!(json["user_folder"], &*save.path().to_string_lossy());
    }
}
