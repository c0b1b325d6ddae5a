//! Integration tests for the PassVault crypto module.

use passvault::crypto::chunk::{open_line, seal_line, CHUNK_CHARS};
use passvault::crypto::{decrypt_value, derive_master_key, encrypt_value, generate_salt};
use passvault::errors::PassVaultError;

// ---------------------------------------------------------------------------
// Value encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = [0xABu8; 32];
    let plaintext = "correct horse battery staple";

    let ciphertext = encrypt_value(&key, plaintext).expect("encrypt should succeed");

    // Ciphertext is base64 and longer than the plaintext
    // (12-byte nonce + 16-byte tag before encoding).
    assert!(ciphertext.len() > plaintext.len());

    let recovered = decrypt_value(&key, &ciphertext).expect("decrypt should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn encrypt_produces_different_ciphertext_each_time() {
    let key = [0xCDu8; 32];
    let plaintext = "same plaintext";

    let ct1 = encrypt_value(&key, plaintext).expect("encrypt 1");
    let ct2 = encrypt_value(&key, plaintext).expect("encrypt 2");

    // Because each call generates a new random nonce, the output must differ.
    assert_ne!(
        ct1, ct2,
        "two encryptions of the same plaintext must differ"
    );
}

#[test]
fn decrypt_with_wrong_key_fails() {
    let key = [0x11u8; 32];
    let wrong_key = [0x22u8; 32];
    let plaintext = "top secret";

    let ciphertext = encrypt_value(&key, plaintext).expect("encrypt");
    let result = decrypt_value(&wrong_key, &ciphertext);

    assert!(
        matches!(result, Err(PassVaultError::DecryptionFailed)),
        "decryption with the wrong key must fail with DecryptionFailed"
    );
}

#[test]
fn decrypt_garbage_fails() {
    let key = [0xAAu8; 32];

    // Not base64 at all.
    assert!(decrypt_value(&key, "!!not-base64!!").is_err());

    // Valid base64 but shorter than a nonce.
    assert!(decrypt_value(&key, "AAAA").is_err());
}

#[test]
fn decrypt_with_corrupted_ciphertext_fails() {
    let key = [0xBBu8; 32];
    let plaintext = "value";

    let ciphertext = encrypt_value(&key, plaintext).expect("encrypt");

    // Flip a character in the middle of the base64 text.
    let mut chars: Vec<char> = ciphertext.chars().collect();
    let mid = chars.len() / 2;
    chars[mid] = if chars[mid] == 'A' { 'B' } else { 'A' };
    let corrupted: String = chars.into_iter().collect();

    let result = decrypt_value(&key, &corrupted);
    assert!(result.is_err(), "corrupted ciphertext must fail auth check");
}

// ---------------------------------------------------------------------------
// Key derivation (Argon2id)
// ---------------------------------------------------------------------------

#[test]
fn derive_master_key_same_inputs_same_output() {
    let password = b"my-secure-passphrase";
    let salt = generate_salt();

    let key1 = derive_master_key(password, &salt).expect("derive 1");
    let key2 = derive_master_key(password, &salt).expect("derive 2");

    assert_eq!(key1, key2, "same password + salt must produce the same key");
}

#[test]
fn derive_master_key_different_salts_different_keys() {
    let password = b"same-password";
    let salt1 = generate_salt();
    let salt2 = generate_salt();

    let key1 = derive_master_key(password, &salt1).expect("derive 1");
    let key2 = derive_master_key(password, &salt2).expect("derive 2");

    assert_ne!(key1, key2, "different salts must produce different keys");
}

#[test]
fn derive_master_key_different_passwords_different_keys() {
    let salt = generate_salt();

    let key1 = derive_master_key(b"password-one", &salt).expect("derive 1");
    let key2 = derive_master_key(b"password-two", &salt).expect("derive 2");

    assert_ne!(
        key1, key2,
        "different passwords must produce different keys"
    );
}

#[test]
fn empty_password_is_rejected() {
    let salt = generate_salt();
    let result = derive_master_key(b"", &salt);

    assert!(
        matches!(result, Err(PassVaultError::EmptyPassword)),
        "empty password must be rejected before derivation"
    );
}

#[test]
fn single_character_password_works() {
    let salt = generate_salt();
    let key = derive_master_key(b"x", &salt).expect("derive");
    assert_eq!(key.len(), 32);
}

// ---------------------------------------------------------------------------
// Chunked line codec
// ---------------------------------------------------------------------------

#[test]
fn chunk_roundtrip_long_line() {
    let key = [0x33u8; 32];
    // 75 characters -> 3 chunks (30 + 30 + 15).
    let plaintext = "a".repeat(75);

    let line = seal_line(&key, &plaintext).expect("seal");
    assert_eq!(line.split('.').count(), 3);

    let recovered = open_line(&key, &line).expect("open");
    assert_eq!(recovered, plaintext);
}

#[test]
fn chunk_short_line_is_single_segment() {
    let key = [0x44u8; 32];
    let plaintext = "short";

    let line = seal_line(&key, plaintext).expect("seal");
    assert!(!line.contains('.'), "short input must not be split");

    assert_eq!(open_line(&key, &line).expect("open"), plaintext);
}

#[test]
fn chunk_boundary_cases() {
    let key = [0x55u8; 32];

    // Exactly one chunk.
    let exact = "e".repeat(CHUNK_CHARS);
    let line = seal_line(&key, &exact).expect("seal exact");
    assert_eq!(line.split('.').count(), 1);
    assert_eq!(open_line(&key, &line).expect("open exact"), exact);

    // One character over.
    let over = "o".repeat(CHUNK_CHARS + 1);
    let line = seal_line(&key, &over).expect("seal over");
    assert_eq!(line.split('.').count(), 2);
    assert_eq!(open_line(&key, &line).expect("open over"), over);

    // Exact multiple of the chunk size: no trailing empty segment.
    let double = "d".repeat(CHUNK_CHARS * 2);
    let line = seal_line(&key, &double).expect("seal double");
    assert_eq!(line.split('.').count(), 2);
    assert_eq!(open_line(&key, &line).expect("open double"), double);
}

#[test]
fn chunk_roundtrip_multibyte_text() {
    let key = [0x66u8; 32];
    // Multi-byte characters crossing the 30-character boundary.
    let plaintext = "пароль-до-банку-".repeat(5);

    let line = seal_line(&key, &plaintext).expect("seal");
    let recovered = open_line(&key, &line).expect("open");
    assert_eq!(recovered, plaintext);
}

#[test]
fn chunk_open_with_wrong_key_fails() {
    let key = [0x77u8; 32];
    let wrong_key = [0x78u8; 32];
    let plaintext = "x".repeat(90);

    let line = seal_line(&key, &plaintext).expect("seal");
    assert!(open_line(&wrong_key, &line).is_err());
}

// ---------------------------------------------------------------------------
// End-to-end: password -> master key -> chunked record line
// ---------------------------------------------------------------------------

#[test]
fn full_crypto_pipeline() {
    let password = b"hunter2";
    let salt = generate_salt();

    // Step 1: Derive the session key from the password.
    let key = derive_master_key(password, &salt).expect("derive master");

    // Step 2: Seal a record-shaped line (longer than one chunk).
    let plaintext =
        r#"{"title":"Bank","username":"alice","password":"p@ss","url":"bank.com"}"#;
    let line = seal_line(&key, plaintext).expect("seal");
    assert!(line.split('.').count() > 1);

    // Step 3: Open it back.
    let recovered = open_line(&key, &line).expect("open");
    assert_eq!(recovered, plaintext);
}
