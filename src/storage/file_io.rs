//! File I/O utilities with atomic writes
//!
//! Provides safe file operations for the key file and the encrypted bookmark
//! blob. Everything dirstash writes is readable by the owner only, and the
//! bookmark blob is replaced via write-to-temp-then-rename so a crash cannot
//! leave a half-written file behind.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{StashError, StashResult};

/// Read a file's entire contents, returning `None` if it does not exist
pub fn read_optional(path: &Path) -> StashResult<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StashError::Io(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Create a directory (with any missing parents) accessible only by the owner
///
/// Every directory level this call creates gets owner-only permissions;
/// levels that already exist are left untouched.
pub fn ensure_private_dir(dir: &Path) -> StashResult<()> {
    if dir.is_dir() {
        return Ok(());
    }

    if let Some(parent) = dir.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_private_dir(parent)?;
        }
    }

    match fs::create_dir(dir) {
        Ok(()) => restrict_dir(dir),
        // Another invocation created it first; its creator set the mode
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(StashError::Io(format!(
            "Failed to create directory {}: {}",
            dir.display(),
            e
        ))),
    }
}

/// Write a file readable/writable by the owner only (plain overwrite)
///
/// Creates the parent directory if needed. Used for the key file, which is
/// written once and never rewritten.
pub fn write_private(path: &Path, bytes: &[u8]) -> StashResult<()> {
    if let Some(parent) = path.parent() {
        ensure_private_dir(parent)?;
    }

    let mut file = open_private(path)
        .map_err(|e| StashError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    file.write_all(bytes)
        .map_err(|e| StashError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(())
}

/// Write a file atomically (write to temp, then rename), owner-only
///
/// This ensures that the file is either completely written or not modified
/// at all, preventing corruption on crashes or power failures. Concurrent
/// writers are not coordinated; the last rename wins.
pub fn write_private_atomic(path: &Path, bytes: &[u8]) -> StashResult<()> {
    if let Some(parent) = path.parent() {
        ensure_private_dir(parent)?;
    }

    // Temp file in same directory (important for atomic rename)
    let temp_path = temp_sibling(path);

    let mut file = open_private(&temp_path)
        .map_err(|e| StashError::Io(format!("Failed to create temp file: {}", e)))?;

    file.write_all(bytes)
        .map_err(|e| StashError::Io(format!("Failed to write data: {}", e)))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| StashError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        StashError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Build the temp path `<file>.tmp` next to the target file
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

#[cfg(unix)]
fn restrict_dir(dir: &Path) -> StashResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(dir, fs::Permissions::from_mode(0o700)).map_err(|e| {
        StashError::Io(format!(
            "Failed to restrict directory {}: {}",
            dir.display(),
            e
        ))
    })
}

#[cfg(not(unix))]
fn restrict_dir(_dir: &Path) -> StashResult<()> {
    Ok(())
}
