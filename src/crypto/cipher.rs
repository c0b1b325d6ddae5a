//! AES-256-GCM encryption of single text values.
//!
//! Each call to `encrypt_value` generates a fresh random 12-byte nonce,
//! prepends it to the ciphertext, and renders the result as base64 so
//! it can live in a line-oriented text file.  `decrypt_value` reverses
//! the encoding and splits the nonce back out before decrypting.
//!
//! Layout inside the base64 envelope:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]
//!
//! Decryption failure on this path is the one and only signal that a
//! candidate password is wrong: opening a store decrypts its control
//! line, and the GCM auth tag rejects any key derived from the wrong
//! password.  Every failure mode here (bad base64, short input, tag
//! mismatch, non-UTF-8 plaintext) therefore maps to the same
//! `DecryptionFailed` error, kept distinct from I/O errors.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{PassVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns base64 of the nonce prepended to the ciphertext.
pub fn encrypt_value(key: &[u8], plaintext: &str) -> Result<String> {
    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Generate a random 12-byte nonce.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    // Encrypt and authenticate the plaintext.
    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|e| PassVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the file only needs to hold one blob.
    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(BASE64.encode(output))
}

/// Decrypt a base64 value that was produced by `encrypt_value`.
///
/// Expects the first 12 decoded bytes to be the nonce, followed by the
/// ciphertext.
pub fn decrypt_value(key: &[u8], encoded: &str) -> Result<String> {
    let data = BASE64
        .decode(encoded)
        .map_err(|_| PassVaultError::DecryptionFailed)?;

    // Make sure we have at least a nonce worth of bytes.
    if data.len() < NONCE_LEN {
        return Err(PassVaultError::DecryptionFailed);
    }

    // Split nonce from ciphertext.
    let (nonce_bytes, ciphertext) = data.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    // Build the cipher from the raw key bytes.
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| PassVaultError::DecryptionFailed)?;

    // Decrypt and verify the auth tag.
    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| PassVaultError::DecryptionFailed)?;

    String::from_utf8(plaintext).map_err(|_| PassVaultError::DecryptionFailed)
}
