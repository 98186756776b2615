//! Storage layer for dirstash
//!
//! Provides the encrypted bookmark store plus the file I/O primitives it is
//! built on (optional reads, atomic owner-only writes).

pub mod bookmarks;
pub mod file_io;

pub use bookmarks::BookmarkStore;
