//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-GCM encryption of single text values with a base64 wire
//!   encoding (`cipher`)
//! - chunked encryption of long plaintext lines (`chunk`)
//! - Argon2id password-based key derivation and the zeroizing
//!   `MasterKey` wrapper (`kdf`)

pub mod chunk;
pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt_value, derive_master_key, ...};
pub use chunk::{open_line, seal_line};
pub use cipher::{decrypt_value, encrypt_value};
pub use kdf::{derive_master_key, derive_master_key_with_params, generate_salt, Argon2Params, MasterKey};
