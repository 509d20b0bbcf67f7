//! Journal persistence.
//!
//! The journal is saved as a single JSON blob (`journal.json`) inside the
//! data directory: load-all and save-all, nothing incremental. Loading a
//! missing file yields an empty journal (first run); a corrupt file is
//! reported as a [`StorageError`] so callers decide whether to degrade or
//! refuse. Saves take an exclusive file lock and go through a temp file
//! rename so a crash mid-write can't leave a half-written journal.

use crate::constants::JOURNAL_FILE_NAME;
use crate::errors::{AppError, AppResult, StorageError};
use crate::journal::Journal;
use fs2::FileExt;
use std::fs::{self, OpenOptions, Permissions};
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Returns the path of the journal blob inside the data directory.
pub fn journal_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(JOURNAL_FILE_NAME)
}

/// Ensures the data directory exists, creating it if necessary.
///
/// Newly created directories get `0o700` permissions on Unix — journal data
/// is personal.
///
/// # Errors
///
/// Returns:
/// - `AppError::Journal` if the provided path is not an absolute path
/// - `AppError::Io` if directory creation or permission setting fails
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Journal(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            let permissions = Permissions::from_mode(crate::constants::DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to set permissions on data directory: {}", e),
                ))
            })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

/// Loads the full journal from the data directory.
///
/// A missing journal file is not an error — it means a fresh journal.
///
/// # Errors
///
/// Returns `StorageError::ReadFailed` if the file exists but can't be read,
/// or `StorageError::Corrupt` if it can't be parsed.
pub fn load_journal(data_dir: &Path) -> AppResult<Journal> {
    let path = journal_file_path(data_dir);

    if !path.exists() {
        debug!("No journal file at {:?}, starting empty", path);
        return Ok(Journal::new());
    }

    let content = fs::read_to_string(&path).map_err(|source| StorageError::ReadFailed {
        path: path.clone(),
        source,
    })?;

    let journal: Journal =
        serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: path.clone(),
            source,
        })?;

    debug!("Loaded journal with {} entries", journal.len());
    Ok(journal)
}

/// Loads the journal, degrading to an empty one on any failure.
///
/// Read-only operations use this: a broken journal file should not take the
/// whole report down. The failure is logged, never swallowed silently.
pub fn load_journal_or_empty(data_dir: &Path) -> Journal {
    match load_journal(data_dir) {
        Ok(journal) => journal,
        Err(e) => {
            warn!("Could not load journal, continuing with an empty one: {}", e);
            Journal::new()
        }
    }
}

/// Saves the full journal to the data directory.
///
/// Holds an exclusive lock on the journal file for the duration of the write
/// so concurrent pigment instances can't interleave saves, and writes through
/// a temp file rename so an interrupted save never truncates the journal.
///
/// # Errors
///
/// Returns:
/// - `StorageError::FileBusy` if another process holds the lock
/// - `StorageError::Serialize` if the journal can't be encoded
/// - `StorageError::WriteFailed` for filesystem failures
pub fn save_journal(data_dir: &Path, journal: &Journal) -> AppResult<()> {
    ensure_data_directory_exists(data_dir)?;
    let path = journal_file_path(data_dir);

    let lock_file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(&path)
        .map_err(|source| StorageError::WriteFailed {
            path: path.clone(),
            source,
        })?;
    lock_file
        .try_lock_exclusive()
        .map_err(|_| StorageError::FileBusy { path: path.clone() })?;

    let json = serde_json::to_string_pretty(journal).map_err(StorageError::Serialize)?;

    let tmp_path = path.with_extension("json.tmp");
    let mut tmp =
        fs::File::create(&tmp_path).map_err(|source| StorageError::WriteFailed {
            path: tmp_path.clone(),
            source,
        })?;
    tmp.write_all(json.as_bytes())
        .and_then(|_| tmp.sync_all())
        .map_err(|source| StorageError::WriteFailed {
            path: tmp_path.clone(),
            source,
        })?;

    #[cfg(unix)]
    {
        let permissions = Permissions::from_mode(crate::constants::DEFAULT_FILE_PERMISSIONS);
        fs::set_permissions(&tmp_path, permissions).map_err(|source| {
            StorageError::WriteFailed {
                path: tmp_path.clone(),
                source,
            }
        })?;
    }

    fs::rename(&tmp_path, &path).map_err(|source| StorageError::WriteFailed {
        path: path.clone(),
        source,
    })?;

    let _ = lock_file.unlock();
    debug!("Saved journal with {} entries to {:?}", journal.len(), path);
    Ok(())
}
