//! The sea region catalog.
//!
//! Each `.xml` file in the `data/` directory is a candidate region, named by
//! its file stem. A candidate is listed only if it holds a well-formed
//! `WorldmapBookMark` block.

use std::fs;
use std::path::{Path, PathBuf};

use sea_blocks::{Block, find_bookmark};
use sea_fs::DecodedText;

use crate::document::read_document;
use crate::layout::AppLayout;
use crate::{Error, Result};

const REGION_EXTENSION: &str = ".xml";

/// A listed region file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionEntry {
    /// File name without the `.xml` extension.
    pub name: String,
    pub path: PathBuf,
}

/// A region loaded from the catalog with its extracted block.
#[derive(Debug, Clone)]
pub struct Region {
    pub name: String,
    pub path: PathBuf,
    pub document: DecodedText,
    pub block: Block,
}

/// Region files in a directory.
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: PathBuf,
}

impl Catalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The catalog in the application's `data/` directory.
    pub fn from_layout(layout: &AppLayout) -> Self {
        Self::new(layout.data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List valid regions, sorted by name ignoring case.
    ///
    /// A missing directory yields an empty list. Files that cannot be read or
    /// have no well-formed bookmark block are skipped.
    pub fn scan(&self) -> Result<Vec<RegionEntry>> {
        if !self.dir.is_dir() {
            tracing::debug!(dir = %self.dir.display(), "Catalog directory missing");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| sea_fs::Error::io(&self.dir, e))?;

        let mut regions = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| sea_fs::Error::io(&self.dir, e))?;
            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy().into_owned();

            let Some(name) = file_name
                .strip_suffix(REGION_EXTENSION)
                .filter(|name| !name.is_empty())
            else {
                continue;
            };
            if !path.is_file() {
                continue;
            }

            match Self::extract(&path) {
                Ok(Some(_)) => regions.push(RegionEntry {
                    name: name.to_string(),
                    path,
                }),
                Ok(None) => tracing::debug!(file = %file_name, "Skipping region without bookmark block"),
                Err(e) => tracing::debug!(file = %file_name, error = %e, "Skipping unreadable region"),
            }
        }

        regions.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        tracing::debug!(count = regions.len(), "Scanned catalog");
        Ok(regions)
    }

    /// Path of the file backing a region name.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        validate_region_name(name)?;
        Ok(self.dir.join(format!("{}{}", name, REGION_EXTENSION)))
    }

    /// Load a region and extract its bookmark block.
    pub fn load(&self, name: &str) -> Result<Region> {
        let path = self.resolve(name)?;
        if !path.is_file() {
            return Err(Error::RegionNotFound {
                name: name.to_string(),
                path,
            });
        }

        let document = read_document(&path)?;
        let block = find_bookmark(&document.text)
            .map_err(|source| Error::MalformedRegion {
                name: name.to_string(),
                source,
            })?
            .ok_or_else(|| Error::SourceBlockMissing {
                name: name.to_string(),
            })?;

        Ok(Region {
            name: name.to_string(),
            path,
            document,
            block,
        })
    }

    fn extract(path: &Path) -> Result<Option<Block>> {
        let document = read_document(path)?;
        Ok(find_bookmark(&document.text)?)
    }
}

/// Regions whose name contains `keyword`, ignoring case.
///
/// A blank keyword matches everything.
pub fn filter_regions<'a>(entries: &'a [RegionEntry], keyword: &str) -> Vec<&'a RegionEntry> {
    let keyword = keyword.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&keyword))
        .collect()
}

/// Validate that a region name is safe to use as a file name in the catalog.
///
/// Any name that names a single file inside the catalog directory is accepted,
/// including ones with surrounding whitespace or inner dots.
pub fn validate_region_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidRegionName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(Error::NoSelection);
    }
    if name.contains(['/', '\\']) {
        return Err(invalid("must not contain path separators"));
    }
    if name == "." || name == ".." {
        return Err(invalid("must not be '.' or '..'"));
    }
    if name.contains('\0') {
        return Err(invalid("must not contain NUL"));
    }
    Ok(())
}
