//! Cryptographic functions for dirstash
//!
//! Provides AES-256-GCM authenticated encryption for the bookmark list and
//! resolution of the 256-bit key from the environment, the key file, or
//! fresh random bytes.

pub mod encryption;
pub mod key;

pub use encryption::{open, seal, NONCE_SIZE};
pub use key::{KeyManager, KeySource, ResolvedKey, StashKey};
