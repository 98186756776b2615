//! Configuration for dirstash
//!
//! Path resolution for the data directory, the encrypted bookmark file,
//! and the key file.

pub mod paths;

pub use paths::StashPaths;
