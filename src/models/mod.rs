//! Core data models for dirstash

pub mod bookmarks;

pub use bookmarks::{parse_index, BookmarkList};
