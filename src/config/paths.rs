//! Path management for dirstash
//!
//! Resolves where the encrypted bookmark list and the key file live.
//!
//! ## Path Resolution Order
//!
//! 1. `DIRSTASH_DATA_DIR` environment variable (if set)
//! 2. `$HOME/.dirstash` (Unix) or `%USERPROFILE%\.dirstash` (Windows)
//!
//! Resolution is pure path math: nothing here touches the filesystem.
//! Directories are created by the writers on first use, so read-only
//! invocations against an environment-supplied key leave no trace on disk.

use std::path::{Path, PathBuf};

use crate::error::{StashError, StashResult};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV_VAR: &str = "DIRSTASH_DATA_DIR";

/// File name of the encrypted bookmark list
const BOOKMARKS_FILE: &str = "bookmarks.enc";

/// File name of the persisted base64 key
const KEY_FILE: &str = "key";

/// Manages all paths used by dirstash
#[derive(Debug, Clone)]
pub struct StashPaths {
    /// Base directory for all dirstash data
    base_dir: PathBuf,
}

impl StashPaths {
    /// Create a new StashPaths instance
    ///
    /// Path resolution:
    /// 1. `DIRSTASH_DATA_DIR` env var (explicit override)
    /// 2. `~/.dirstash` under the user's home directory
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> StashResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            default_base_dir()?
        };

        Ok(Self { base_dir })
    }

    /// Create StashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.dirstash/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the encrypted bookmark list
    pub fn bookmarks_file(&self) -> PathBuf {
        self.base_dir.join(BOOKMARKS_FILE)
    }

    /// Get the path to the key file
    pub fn key_file(&self) -> PathBuf {
        self.base_dir.join(KEY_FILE)
    }
}

/// Resolve the default base directory from the user's home directory
#[cfg(not(windows))]
fn default_base_dir() -> StashResult<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| StashError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".dirstash"))
}

/// Resolve the default base directory from the user's home directory
#[cfg(windows)]
fn default_base_dir() -> StashResult<PathBuf> {
    let home = std::env::var("USERPROFILE")
        .map_err(|_| StashError::Config("USERPROFILE environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".dirstash"))
}
