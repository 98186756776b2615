//! Encrypted bookmark store
//!
//! Loads and saves the bookmark list as an AES-256-GCM blob. The plaintext
//! is the list's JSON form; the file on disk is `nonce || ciphertext || tag`.

use std::path::PathBuf;

use crate::crypto::encryption;
use crate::crypto::key::StashKey;
use crate::error::{StashError, StashResult};
use crate::models::BookmarkList;

use super::file_io;

/// Persists the bookmark list, encrypted at rest
pub struct BookmarkStore {
    path: PathBuf,
    key: StashKey,
}

impl BookmarkStore {
    /// Create a store backed by the given file, encrypting with the given key
    pub fn new(path: PathBuf, key: StashKey) -> Self {
        Self { path, key }
    }

    /// Load and decrypt the bookmark list
    ///
    /// A missing file yields an empty list, not an error. A file that fails
    /// authentication yields `StashError::AuthFailure`; one whose decrypted
    /// contents are not a JSON array of strings yields `StashError::Corrupt`.
    pub fn load(&self) -> StashResult<BookmarkList> {
        let blob = match file_io::read_optional(&self.path)? {
            Some(blob) => blob,
            None => return Ok(BookmarkList::new()),
        };

        let plaintext = encryption::open(&self.key, &blob)?;

        serde_json::from_slice(&plaintext)
            .map_err(|e| StashError::Corrupt(format!("invalid bookmark list: {}", e)))
    }

    /// Encrypt and persist the bookmark list
    ///
    /// Whole-file overwrite: the complete list replaces whatever was stored
    /// before. Concurrent invocations are not coordinated; the last writer
    /// wins.
    pub fn save(&self, bookmarks: &BookmarkList) -> StashResult<()> {
        let plaintext = serde_json::to_vec(bookmarks)
            .map_err(|e| StashError::Io(format!("Failed to encode bookmark list: {}", e)))?;

        let blob = encryption::seal(&self.key, &plaintext)?;
        file_io::write_private_atomic(&self.path, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_store(temp_dir: &TempDir) -> BookmarkStore {
        BookmarkStore::new(
            temp_dir.path().join("bookmarks.enc"),
            StashKey::from_bytes([3u8; 32]),
        )
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let bookmarks = store.load().unwrap();
        assert!(bookmarks.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let mut bookmarks = BookmarkList::new();
        bookmarks.push("/home/user/projects");
        bookmarks.push("/tmp");
        bookmarks.push("/home/user/projects"); // duplicates are allowed

        store.save(&bookmarks).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, bookmarks);
        assert_eq!(loaded.len(), 3);
    }

    #[test]
    fn test_save_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        store.save(&BookmarkList::new()).unwrap();

        assert!(temp_dir.path().join("bookmarks.enc").exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_is_not_plaintext() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let mut bookmarks = BookmarkList::new();
        bookmarks.push("/very/secret/place");
        store.save(&bookmarks).unwrap();

        let raw = fs::read(temp_dir.path().join("bookmarks.enc")).unwrap();
        let raw_str = String::from_utf8_lossy(&raw);
        assert!(!raw_str.contains("/very/secret/place"));
    }

    #[test]
    fn test_load_with_wrong_key_fails_authentication() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let mut bookmarks = BookmarkList::new();
        bookmarks.push("/a");
        store.save(&bookmarks).unwrap();

        let other = BookmarkStore::new(
            temp_dir.path().join("bookmarks.enc"),
            StashKey::from_bytes([4u8; 32]),
        );

        let result = other.load();
        assert!(matches!(result, Err(StashError::AuthFailure)));
    }

    #[test]
    fn test_load_truncated_file_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        fs::write(temp_dir.path().join("bookmarks.enc"), [1u8; 5]).unwrap();

        let result = store.load();
        assert!(matches!(result, Err(StashError::Corrupt(_))));
    }

    #[test]
    fn test_load_garbage_file_fails_authentication() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        fs::write(temp_dir.path().join("bookmarks.enc"), [1u8; 64]).unwrap();

        let result = store.load();
        assert!(matches!(result, Err(StashError::AuthFailure)));
    }

    #[test]
    fn test_load_non_json_plaintext_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        // Authentic ciphertext whose plaintext is not a bookmark list
        let key = StashKey::from_bytes([3u8; 32]);
        let blob = encryption::seal(&key, b"not a json array").unwrap();
        fs::write(temp_dir.path().join("bookmarks.enc"), blob).unwrap();

        let result = store.load();
        assert!(matches!(result, Err(StashError::Corrupt(_))));
    }

    #[test]
    fn test_paths_with_spaces_and_unicode() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let mut bookmarks = BookmarkList::new();
        bookmarks.push("/home/user/my projects/älbum");
        store.save(&bookmarks).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.last(), Some("/home/user/my projects/älbum"));
    }

    #[test]
    fn test_overwrite_replaces_previous_list() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let mut first = BookmarkList::new();
        first.push("/a");
        first.push("/b");
        store.save(&first).unwrap();

        let mut second = store.load().unwrap();
        second.pop();
        store.save(&second).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.last(), Some("/a"));
    }
}
