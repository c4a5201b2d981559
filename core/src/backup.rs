//! One-time backups of stock index files.
//!
//! The first time an index is about to be replaced, its current bytes are
//! copied to `<path>_orig`. An existing backup is never touched again, so it
//! always holds the card's state from before the very first rebuild.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use gamelist_shared::{BACKUP_SUFFIX, GamelistError, PathKind, Result};

/// What [`ensure_backup`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    Created(PathBuf),
    AlreadyPresent(PathBuf),
}

/// `<path>_orig`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}

/// Fail with [`GamelistError::PathNotFound`] unless `path` is an existing file.
pub fn require_index_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(GamelistError::PathNotFound {
            kind: PathKind::IndexFile,
            path: path.to_path_buf(),
        })
    }
}

/// Back up `path` unless a backup file already exists.
///
/// Anything else sitting at the backup path (a directory, say) is not a
/// backup; the copy is attempted and fails with [`GamelistError::BackupFailed`].
pub fn ensure_backup(path: &Path) -> Result<BackupOutcome> {
    require_index_file(path)?;

    let backup = backup_path(path);
    if backup.is_file() {
        tracing::debug!("Backup {} already present", backup.display());
        return Ok(BackupOutcome::AlreadyPresent(backup));
    }

    tracing::info!("Backing up {} as {}", path.display(), backup.display());
    std::fs::copy(path, &backup).map_err(|source| GamelistError::BackupFailed {
        path: path.to_path_buf(),
        backup: backup.clone(),
        source,
    })?;

    Ok(BackupOutcome::Created(backup))
}
