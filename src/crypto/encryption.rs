//! AES-256-GCM encryption/decryption
//!
//! Provides authenticated encryption for the bookmark list at rest. Each
//! encryption operation generates a unique nonce, and the persisted blob is
//! the raw concatenation `nonce || ciphertext || tag` with no further framing.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};

use crate::crypto::key::StashKey;
use crate::error::{StashError, StashResult};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Encrypt plaintext using AES-256-GCM
///
/// Generates a random nonce for each call and prepends it to the
/// authenticated ciphertext, so the returned blob is self-contained.
pub fn seal(key: &StashKey, plaintext: &[u8]) -> StashResult<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| StashError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| StashError::Encryption(format!("Encryption failed: {}", e)))?;

    let mut blob = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

/// Decrypt a `nonce || ciphertext || tag` blob using AES-256-GCM
///
/// Fails with `StashError::Corrupt` if the blob is shorter than the nonce,
/// and with `StashError::AuthFailure` if the authentication tag does not
/// verify (wrong key or tampered data). Never returns unauthenticated
/// plaintext.
pub fn open(key: &StashKey, blob: &[u8]) -> StashResult<Vec<u8>> {
    if blob.len() < NONCE_SIZE {
        return Err(StashError::Corrupt("ciphertext too short".to_string()));
    }

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| StashError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_SIZE);
    let nonce = Nonce::from_slice(nonce_bytes);

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| StashError::AuthFailure)
}
