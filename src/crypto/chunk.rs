//! Chunked encryption of long plaintext lines.
//!
//! The file format encrypts serialized records in 30-character pieces,
//! a legacy cap from a block cipher that limited single-call input
//! size.  The chunk size stays, but the boundaries are explicit: each
//! chunk's base64 ciphertext becomes one dot-separated segment of the
//! output line, so the decode side splits on `.` (not in the base64
//! alphabet) and decrypts each segment independently.  Encode and
//! decode are exact mirrors.

use crate::crypto::cipher;
use crate::errors::Result;

/// Maximum plaintext characters per encrypted segment.
pub const CHUNK_CHARS: usize = 30;

/// Separator between ciphertext segments on one line.
const SEGMENT_SEPARATOR: char = '.';

/// Encrypt `plaintext` as one line of dot-separated segments.
///
/// The plaintext is split into consecutive 30-character chunks (the
/// last one may be shorter) and each chunk is sealed independently.
/// A plaintext of 30 characters or fewer produces a single segment
/// with no separator.
pub fn seal_line(key: &[u8], plaintext: &str) -> Result<String> {
    let chunks = char_chunks(plaintext);
    let mut segments = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        segments.push(cipher::encrypt_value(key, chunk)?);
    }
    Ok(segments.join(&SEGMENT_SEPARATOR.to_string()))
}

/// Decrypt a line produced by `seal_line`.
///
/// Splits on the segment separator, decrypts each segment, and
/// concatenates the plaintexts in order.
pub fn open_line(key: &[u8], line: &str) -> Result<String> {
    let mut plaintext = String::new();
    for segment in line.split(SEGMENT_SEPARATOR) {
        plaintext.push_str(&cipher::decrypt_value(key, segment)?);
    }
    Ok(plaintext)
}

/// Split a string into consecutive `CHUNK_CHARS`-character pieces.
///
/// Splits at character boundaries, so multi-byte UTF-8 never tears.
fn char_chunks(s: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = s;
    loop {
        match rest.char_indices().nth(CHUNK_CHARS) {
            Some((byte_idx, _)) => {
                let (head, tail) = rest.split_at(byte_idx);
                chunks.push(head);
                rest = tail;
            }
            None => {
                chunks.push(rest);
                break;
            }
        }
    }
    chunks
}
