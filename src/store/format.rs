//! Line-oriented store file format and atomic rewrite.
//!
//! A `.pv` file has this layout:
//!
//! ```text
//! PSVT1 {"version":1,"salt":"...","created_at":"...","argon2_params":{...}}
//! <control line: base64 ciphertext of the random store id>
//! <record line>
//! <record line>
//! ...
//! ```
//!
//! - **Line 1**: the `PSVT1` magic + version token, a space, then the
//!   plaintext `StoreHeader` JSON.  The header must be readable before
//!   any key exists — it carries the salt and Argon2 parameters needed
//!   to derive the key.
//! - **Line 2**: the control line.  Decrypting it is how a candidate
//!   password is verified.
//! - **Lines 3..**: one encrypted account record per line, as
//!   dot-separated ciphertext segments (see `crypto::chunk`).

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic + version token at the start of every store file.
const MAGIC: &str = "PSVT1";

/// Current format version (mirrored inside the header JSON).
pub const CURRENT_VERSION: u8 = 1;

// ---------------------------------------------------------------------------
// StoreHeader
// ---------------------------------------------------------------------------

/// Argon2 parameters stored in the header so the exact same KDF
/// settings are used when re-opening.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoredArgon2Params {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for StoredArgon2Params {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

/// Plaintext metadata on the first line of a store file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreHeader {
    /// Format version.
    pub version: u8,

    /// The salt used for Argon2id key derivation (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub salt: Vec<u8>,

    /// When this store was first created.
    pub created_at: DateTime<Utc>,

    /// Argon2 params used at creation (stored so open uses the same).
    #[serde(default)]
    pub argon2_params: StoredArgon2Params,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// The three sections of a store file, still encrypted.
pub struct RawStore {
    pub header: StoreHeader,
    /// Base64 ciphertext of the store id, exactly as stored on disk.
    pub control_line: String,
    /// One encrypted record per entry, exactly as stored on disk.
    pub record_lines: Vec<String>,
}

/// Read a store file from disk and split it into its sections.
///
/// Only the plaintext header is parsed here; the control line and
/// record lines are returned as-is for the caller to decrypt once it
/// has derived a key.
pub fn read_store(path: &Path) -> Result<RawStore> {
    if !path.exists() {
        return Err(PassVaultError::StoreNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines();

    let first = lines
        .next()
        .ok_or_else(|| PassVaultError::InvalidStoreFormat("file is empty".into()))?;

    let header_json = first
        .strip_prefix(MAGIC)
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or_else(|| {
            PassVaultError::InvalidStoreFormat(format!("missing {MAGIC} magic token"))
        })?;

    let header: StoreHeader = serde_json::from_str(header_json)
        .map_err(|e| PassVaultError::InvalidStoreFormat(format!("header JSON: {e}")))?;

    if header.version != CURRENT_VERSION {
        return Err(PassVaultError::InvalidStoreFormat(format!(
            "unsupported version {}, expected {CURRENT_VERSION}",
            header.version
        )));
    }

    let control_line = lines
        .next()
        .ok_or_else(|| PassVaultError::InvalidStoreFormat("missing control line".into()))?
        .to_string();

    let record_lines = lines
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    Ok(RawStore {
        header,
        control_line,
        record_lines,
    })
}

/// Write a store file to disk **atomically**.
///
/// 1. Render the header line, control line, and record lines.
/// 2. Write to a temp file in the same directory.
/// 3. Rename the temp file over the target path.
///
/// The rename ensures a crash mid-write never leaves a half-written
/// store behind.
pub fn write_store(
    path: &Path,
    header: &StoreHeader,
    control_line: &str,
    record_lines: &[String],
) -> Result<()> {
    let header_json = serde_json::to_string(header)
        .map_err(|e| PassVaultError::SerializationError(format!("header: {e}")))?;

    let mut contents = String::new();
    contents.push_str(MAGIC);
    contents.push(' ');
    contents.push_str(&header_json);
    contents.push('\n');
    contents.push_str(control_line);
    contents.push('\n');
    for line in record_lines {
        contents.push_str(line);
        contents.push('\n');
    }

    // Atomic write: write to a temp file, then rename.  The temp file
    // is in the same directory so rename stays on one filesystem.
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, &contents)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

pub(crate) fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let encoded = BASE64.encode(data);
    serializer.serialize_str(&encoded)
}

pub(crate) fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}
