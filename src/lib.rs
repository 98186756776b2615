//! dirstash - Encrypted directory bookmarks for the command line
//!
//! This library provides the core functionality for the dirstash CLI, a
//! small tool for bookmarking directories you want to come back to. The
//! bookmark list is stored encrypted at rest with AES-256-GCM.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and file path resolution
//! - `error`: Custom error types
//! - `models`: The bookmark list and index parsing
//! - `crypto`: Key management and authenticated encryption
//! - `storage`: Encrypted file storage layer
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use dirstash::config::StashPaths;
//! use dirstash::crypto::KeyManager;
//! use dirstash::storage::BookmarkStore;
//!
//! let paths = StashPaths::new()?;
//! let resolved = KeyManager::new(&paths).resolve()?;
//! let store = BookmarkStore::new(paths.bookmarks_file(), resolved.key);
//! let bookmarks = store.load()?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{StashError, StashResult};
