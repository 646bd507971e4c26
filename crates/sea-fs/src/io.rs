//! File I/O: locked atomic writes and verified copies

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::checksum::{compute_bytes_checksum, compute_file_checksum};
use crate::{Error, Result};

/// Read the raw bytes of a file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Write content atomically to a file with locking.
///
/// Content goes to a temporary sibling file under an exclusive advisory lock,
/// is flushed, then renamed over `path`. Readers see either the old or the new
/// file, never a partial one.
///
/// A symlinked `path` is followed so the link survives and its target is
/// replaced, and an existing file keeps its permissions.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let resolved = resolve_symlink(path)?;
    let path = resolved.as_path();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    let permissions = fs::metadata(path).ok().map(|meta| meta.permissions());
    let written = temp_file
        .write_all(content)
        .and_then(|()| match permissions {
            Some(permissions) => temp_file.set_permissions(permissions),
            None => Ok(()),
        })
        .and_then(|()| temp_file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;
    drop(temp_file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::io(path, e)
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Copy `source` to `dest` byte-for-byte and verify the copy by checksum.
///
/// An existing `dest` is overwritten. Returns the checksum shared by both files.
pub fn copy_verified(source: &Path, dest: &Path) -> Result<String> {
    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let bytes = read_bytes(source)?;
    fs::write(dest, &bytes).map_err(|e| Error::io(dest, e))?;

    let original = compute_bytes_checksum(&bytes);
    let copy = compute_file_checksum(dest)?;
    if original != copy {
        return Err(Error::ChecksumMismatch {
            source_path: source.to_path_buf(),
            copy_path: dest.to_path_buf(),
        });
    }

    tracing::debug!(
        source = %source.display(),
        dest = %dest.display(),
        checksum = %copy,
        "Copied file"
    );
    Ok(copy)
}

/// Canonicalize a path without Windows verbatim (`\\?\`) prefixes.
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| Error::io(path, e))
}

fn resolve_symlink(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}
