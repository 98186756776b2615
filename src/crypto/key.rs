//! Encryption key management
//!
//! Resolves the 256-bit key protecting the bookmark list. The key comes from
//! (in priority order) the `DIRSTASH_KEY` environment variable, the persisted
//! key file, or fresh random bytes written to that file on first use.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use base64::{engine::general_purpose::STANDARD, Engine};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::StashPaths;
use crate::error::{StashError, StashResult};
use crate::storage::file_io;

/// Environment variable holding a base64-encoded key override
pub const KEY_ENV_VAR: &str = "DIRSTASH_KEY";

/// Length of the AES-256 key in bytes
pub const KEY_LEN: usize = 32;

/// A 256-bit encryption key, wiped from memory on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct StashKey([u8; KEY_LEN]);

impl StashKey {
    /// Generate a fresh random key
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Wrap existing key bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

// Never print key material
impl fmt::Debug for StashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StashKey([REDACTED])")
    }
}

/// Where a resolved key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Supplied via the `DIRSTASH_KEY` environment variable
    Environment,
    /// Read from the persisted key file
    KeyFile,
    /// Freshly generated and written to the key file
    Generated,
}

/// A resolved key together with its provenance
///
/// `KeySource::Generated` means a new key file was just written. Surfacing
/// that to the user is the caller's decision, not the resolver's.
#[derive(Debug)]
pub struct ResolvedKey {
    pub key: StashKey,
    pub source: KeySource,
}

/// Resolves the encryption key once per invocation
pub struct KeyManager {
    key_path: PathBuf,
}

impl KeyManager {
    /// Create a key manager using the configured key-file location
    pub fn new(paths: &StashPaths) -> Self {
        Self {
            key_path: paths.key_file(),
        }
    }

    /// Resolve the encryption key
    ///
    /// Resolution order:
    /// 1. `DIRSTASH_KEY`, which must be valid base64 of exactly 32 bytes.
    ///    A malformed or non-UTF-8 value is an error, never a fallback.
    /// 2. an existing key file whose trimmed contents decode to 32 bytes
    /// 3. a freshly generated key, persisted to the key file with owner-only
    ///    permissions
    ///
    /// Steps 1 and 2 have no filesystem side effects.
    pub fn resolve(&self) -> StashResult<ResolvedKey> {
        let env_key = match std::env::var_os(KEY_ENV_VAR) {
            Some(value) => {
                let value = value.into_string().map_err(|_| {
                    StashError::Key(format!(
                        "invalid {}: value is not valid UTF-8",
                        KEY_ENV_VAR
                    ))
                })?;
                Some(value)
            }
            None => None,
        };

        self.resolve_with_override(env_key.as_deref())
    }

    /// Resolve with an explicit override value in place of the environment
    ///
    /// Split out from [`resolve`](Self::resolve) so tests can exercise every
    /// resolution path without mutating process-wide state.
    pub fn resolve_with_override(&self, override_key: Option<&str>) -> StashResult<ResolvedKey> {
        if let Some(encoded) = override_key {
            if !encoded.is_empty() {
                return Ok(ResolvedKey {
                    key: decode_env_key(encoded)?,
                    source: KeySource::Environment,
                });
            }
        }

        if let Some(key) = self.read_key_file() {
            return Ok(ResolvedKey {
                key,
                source: KeySource::KeyFile,
            });
        }

        let key = self.generate_and_persist()?;
        Ok(ResolvedKey {
            key,
            source: KeySource::Generated,
        })
    }

    /// Read the persisted key, or `None` if the file is missing or unusable
    ///
    /// An unreadable or malformed key file is not reported: resolution falls
    /// through and the file is replaced by a freshly generated key.
    fn read_key_file(&self) -> Option<StashKey> {
        let contents = fs::read_to_string(&self.key_path).ok()?;
        let bytes = STANDARD.decode(contents.trim()).ok()?;
        let bytes: [u8; KEY_LEN] = bytes.try_into().ok()?;
        Some(StashKey::from_bytes(bytes))
    }

    /// Generate a fresh key and persist its base64 encoding to the key file
    fn generate_and_persist(&self) -> StashResult<StashKey> {
        let key = StashKey::generate();
        let encoded = STANDARD.encode(key.as_bytes());
        file_io::write_private(&self.key_path, encoded.as_bytes())?;
        Ok(key)
    }
}

/// Decode and validate a key supplied through the environment
fn decode_env_key(encoded: &str) -> StashResult<StashKey> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| StashError::Key(format!("invalid {}: {}", KEY_ENV_VAR, e)))?;

    let bytes: [u8; KEY_LEN] = bytes.try_into().map_err(|_| {
        StashError::Key(format!(
            "{} must be {} bytes (base64-encoded)",
            KEY_ENV_VAR, KEY_LEN
        ))
    })?;

    Ok(StashKey::from_bytes(bytes))
}
