//! Applying a sea region to the game config, and undoing it.
//!
//! The pipeline is strictly sequential: check inputs, extract the region's
//! block, splice it into `gamevariable.xml`, re-encode, back up the original
//! bytes, then write. Nothing touches the disk until the new content has been
//! fully produced.

use std::path::PathBuf;

use sea_blocks::{Block, splice_bookmark};
use sea_fs::io;

use crate::catalog::Catalog;
use crate::document::read_document;
use crate::layout::AppLayout;
use crate::preferences::Preferences;
use crate::{Error, Result};

/// Options for [`apply_region`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    /// Compute the result without writing the backup or the target.
    pub dry_run: bool,
}

/// What [`apply_region`] did, or would do on a dry run.
#[derive(Debug, Clone)]
pub struct ApplyReport {
    pub region: String,
    pub target: PathBuf,
    /// Where the original was copied; `None` on a dry run.
    pub backup: Option<PathBuf>,
    /// Encoding the target was read and written in.
    pub encoding: &'static str,
    /// Whether the new content differs from the old.
    pub changed: bool,
    /// Extra bookmark blocks in the target that were left as they were.
    pub untouched_blocks: usize,
    /// The block taken from the region file.
    pub inserted: Block,
    /// The block that was replaced, positioned in the original target text.
    pub replaced: Block,
    /// Target text before the splice.
    pub original: String,
    /// Target text after the splice.
    pub updated: String,
    pub dry_run: bool,
}

/// What [`restore_backup`] did.
#[derive(Debug, Clone)]
pub struct RestoreReport {
    pub backup: PathBuf,
    pub target: PathBuf,
    pub checksum: String,
}

/// Splice the bookmark block of region `name` into the configured game config.
///
/// # Errors
///
/// Checks run in this order, stopping at the first failure:
///
/// - [`Error::NoSelection`] when `name` is empty
/// - [`Error::RegionNotFound`] when the region file is missing
/// - [`Error::FolderNotConfigured`], [`Error::FolderNotFound`],
///   [`Error::TargetNotFound`] for the user folder and its game config
/// - [`Error::SourceBlockMissing`] / [`Error::MalformedRegion`] for the region
/// - [`Error::TargetBlockMissing`] / [`Error::MalformedTarget`] for the target
/// - encoding and I/O failures from `sea-fs`
pub fn apply_region(
    layout: &AppLayout,
    prefs: &Preferences,
    name: &str,
    options: ApplyOptions,
) -> Result<ApplyReport> {
    if name.is_empty() {
        return Err(Error::NoSelection);
    }

    let catalog = Catalog::from_layout(layout);
    let region_path = catalog.resolve(name)?;
    if !region_path.is_file() {
        return Err(Error::RegionNotFound {
            name: name.to_string(),
            path: region_path,
        });
    }

    let target = prefs.require_target()?;

    tracing::debug!(region = name, "Reading sea region");
    let region = catalog.load(name)?;

    tracing::debug!(target = %target.display(), "Reading target");
    let document = read_document(&target)?;
    let splice = splice_bookmark(&document.text, &region.block.text).map_err(|e| match e {
        sea_blocks::Error::BlockNotFound { .. } => Error::TargetBlockMissing {
            path: target.clone(),
        },
        sea_blocks::Error::Malformed { .. } => Error::MalformedTarget {
            path: target.clone(),
            source: e,
        },
        other => Error::Blocks(other),
    })?;

    // Encode first so an unencodable region never leaves a half-done job behind
    let bytes = document.reencode(&splice.content)?;
    let changed = splice.changed(&document.text);

    let backup = if options.dry_run {
        tracing::debug!("Dry run, leaving files untouched");
        None
    } else {
        let backup = layout.backup_file();
        io::copy_verified(&target, &backup)?;
        io::write_atomic(&target, &bytes)?;
        tracing::info!(
            region = name,
            target = %target.display(),
            backup = %backup.display(),
            encoding = document.encoding_name(),
            "Applied sea region"
        );
        Some(backup)
    };

    Ok(ApplyReport {
        region: region.name,
        target,
        backup,
        encoding: document.encoding_name(),
        changed,
        untouched_blocks: splice.untouched,
        inserted: region.block,
        replaced: splice.replaced,
        original: document.text,
        updated: splice.content,
        dry_run: options.dry_run,
    })
}

/// Copy the backup over the configured game config.
pub fn restore_backup(layout: &AppLayout, prefs: &Preferences) -> Result<RestoreReport> {
    let folder = prefs.require_folder()?;
    let backup = layout.backup_file();
    if !backup.is_file() {
        return Err(Error::BackupNotFound { path: backup });
    }

    let target = AppLayout::target_file(folder);
    let checksum = io::copy_verified(&backup, &target)?;
    tracing::info!(target = %target.display(), "Restored backup");

    Ok(RestoreReport {
        backup,
        target,
        checksum,
    })
}
