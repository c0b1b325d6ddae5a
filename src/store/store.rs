//! High-level store operations used by CLI commands.
//!
//! `Store` wraps the file format layer and the crypto layer so the
//! rest of the application can work with simple method calls like
//! `store.upsert_account(record)`.  The master key lives inside the
//! store for the session and is discarded by `lock`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::crypto::chunk;
use crate::crypto::cipher;
use crate::crypto::kdf::{derive_master_key_with_params, generate_salt, Argon2Params, MasterKey};
use crate::errors::{PassVaultError, Result};

use super::account::AccountRecord;
use super::codec;
use super::format::{self, StoreHeader, StoredArgon2Params, CURRENT_VERSION};

/// Length of the random store id in bytes (160 bits).
const STORE_ID_LEN: usize = 20;

/// The main store handle.  Create one with `Store::create` or
/// `Store::open`, then use its methods to manage accounts.
pub struct Store {
    /// Path to the `.pv` file on disk.
    path: PathBuf,

    /// Plaintext header (version, salt, Argon2 params, created_at).
    header: StoreHeader,

    /// The control value written encrypted at creation.  Decrypting it
    /// at open time is what authenticates a candidate password; it
    /// never changes across saves.
    store_id: String,

    /// In-memory map of account title -> record.
    accounts: HashMap<String, AccountRecord>,

    /// The derived master key.  `Some` between a successful
    /// open/create and `lock`; zeroized on drop.
    master_key: Option<MasterKey>,
}

impl Store {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a brand-new store file at `path`.
    ///
    /// Generates a random salt, derives the master key from the
    /// password, generates a random 160-bit store id, and writes a
    /// store with an empty account table to disk.
    ///
    /// Pass `None` for `argon2_params` to use sensible defaults.
    /// Pass `Some(settings.argon2_params())` to use config values.
    pub fn create(
        path: &Path,
        password: &[u8],
        argon2_params: Option<&Argon2Params>,
    ) -> Result<Self> {
        if path.exists() {
            return Err(PassVaultError::StoreAlreadyExists(path.to_path_buf()));
        }

        // 1. Generate a random salt and resolve Argon2 params.
        let salt = generate_salt();
        let effective_params = argon2_params.copied().unwrap_or_default();

        // 2. Derive the master key (empty passwords are rejected here).
        let mut master_bytes = derive_master_key_with_params(password, &salt, &effective_params)?;
        let master_key = MasterKey::new(master_bytes);
        master_bytes.zeroize();

        // 3. Generate the store id: 160 random bits rendered as text.
        let mut id_bytes = [0u8; STORE_ID_LEN];
        OsRng.fill_bytes(&mut id_bytes);
        let store_id = BASE64.encode(id_bytes);

        // 4. Build the header (store the params so open uses the same).
        let header = StoreHeader {
            version: CURRENT_VERSION,
            salt: salt.to_vec(),
            created_at: Utc::now(),
            argon2_params: StoredArgon2Params {
                memory_kib: effective_params.memory_kib,
                iterations: effective_params.iterations,
                parallelism: effective_params.parallelism,
            },
        };

        let store = Self {
            path: path.to_path_buf(),
            header,
            store_id,
            accounts: HashMap::new(),
            master_key: Some(master_key),
        };

        // 5. Persist the empty store to disk.
        store.save()?;

        Ok(store)
    }

    /// Open an existing store file, verifying the password.
    ///
    /// Reads the file, derives the master key from the password and the
    /// stored salt/params, and decrypts the control line — the auth tag
    /// on that line is the password check.  On success the account
    /// table is loaded from the remaining lines.
    ///
    /// Failures are typed: `DecryptionFailed` means the password is
    /// wrong, `Io` a disk problem, `InvalidStoreFormat` or
    /// `MalformedRecord` a corrupt file.  On any error no store is
    /// constructed — there is no partial state to clean up.
    pub fn open(path: &Path, password: &[u8]) -> Result<Self> {
        let raw = format::read_store(path)?;

        // Derive the key exactly as it was derived at creation.
        let params = Argon2Params {
            memory_kib: raw.header.argon2_params.memory_kib,
            iterations: raw.header.argon2_params.iterations,
            parallelism: raw.header.argon2_params.parallelism,
        };
        let mut master_bytes = derive_master_key_with_params(password, &raw.header.salt, &params)?;
        let master_key = MasterKey::new(master_bytes);
        master_bytes.zeroize();

        // If this line decrypts, the password is correct.
        cipher::decrypt_value(master_key.as_bytes(), &raw.control_line)?;

        let mut store = Self {
            path: path.to_path_buf(),
            header: raw.header,
            store_id: String::new(),
            accounts: HashMap::new(),
            master_key: Some(master_key),
        };
        store.load()?;

        Ok(store)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Re-read the file and replace the in-memory table.
    ///
    /// Decrypts the control line (already verified at open) into the
    /// held store id, then decrypts and parses every record line.
    /// Later lines overwrite earlier ones with the same title.  The
    /// table is swapped in only after every line has parsed — a failure
    /// partway through leaves the previous table untouched.
    pub fn load(&mut self) -> Result<()> {
        let raw = format::read_store(&self.path)?;
        let key = self.key()?;

        let store_id = cipher::decrypt_value(key, &raw.control_line)?;

        let mut accounts = HashMap::with_capacity(raw.record_lines.len());
        for line in &raw.record_lines {
            let plaintext = chunk::open_line(key, line)?;
            let record = codec::decode_record(&plaintext)?;
            accounts.insert(record.title.clone(), record);
        }

        self.store_id = store_id;
        self.accounts = accounts;
        Ok(())
    }

    /// Serialize the table and rewrite the whole file atomically.
    ///
    /// Line 1 is the header, line 2 the encrypted store id, then one
    /// chunk-encrypted line per record.  Records are sorted by title
    /// for deterministic output; there are no append semantics.
    pub fn save(&self) -> Result<()> {
        let key = self.key()?;

        let control_line = cipher::encrypt_value(key, &self.store_id)?;

        let mut records: Vec<&AccountRecord> = self.accounts.values().collect();
        records.sort_by(|a, b| a.title.cmp(&b.title));

        let mut record_lines = Vec::with_capacity(records.len());
        for record in records {
            let plaintext = codec::encode_record(record)?;
            record_lines.push(chunk::seal_line(key, &plaintext)?);
        }

        format::write_store(&self.path, &self.header, &control_line, &record_lines)
    }

    /// Discard the master key and clear the account table.
    ///
    /// The key bytes are zeroized; every operation that needs the key
    /// fails with `StoreLocked` until the store is re-opened.
    pub fn lock(&mut self) {
        self.master_key = None;
        self.accounts.clear();
    }

    /// Returns `true` once `lock` has discarded the key.
    pub fn is_locked(&self) -> bool {
        self.master_key.is_none()
    }

    fn key(&self) -> Result<&[u8]> {
        self.master_key
            .as_ref()
            .map(|k| k.as_bytes().as_slice())
            .ok_or(PassVaultError::StoreLocked)
    }

    // ------------------------------------------------------------------
    // Account table
    // ------------------------------------------------------------------

    /// Add or replace an account, keyed by title (last write wins).
    pub fn upsert_account(&mut self, record: AccountRecord) -> Result<()> {
        Self::validate_title(&record.title)?;
        self.accounts.insert(record.title.clone(), record);
        Ok(())
    }

    /// Look up an account by title.
    pub fn account(&self, title: &str) -> Option<&AccountRecord> {
        self.accounts.get(title)
    }

    /// Remove an account from the table.
    pub fn remove_account(&mut self, title: &str) -> Result<()> {
        if self.accounts.remove(title).is_none() {
            return Err(PassVaultError::AccountNotFound(title.to_string()));
        }
        Ok(())
    }

    /// All accounts, sorted by title.
    pub fn accounts(&self) -> Vec<&AccountRecord> {
        let mut list: Vec<&AccountRecord> = self.accounts.values().collect();
        list.sort_by(|a, b| a.title.cmp(&b.title));
        list
    }

    /// Returns the number of accounts in the store.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Returns `true` if an account with the given title exists.
    pub fn contains(&self, title: &str) -> bool {
        self.accounts.contains_key(title)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the store creation timestamp.
    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.header.created_at
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Validate that an account title is usable as a table key.
    ///
    /// Titles are free-form but must be non-empty and at most 256
    /// characters.
    fn validate_title(title: &str) -> Result<()> {
        if title.is_empty() {
            return Err(PassVaultError::CommandFailed(
                "account title cannot be empty".into(),
            ));
        }
        if title.chars().count() > 256 {
            return Err(PassVaultError::CommandFailed(
                "account title cannot exceed 256 characters".into(),
            ));
        }
        Ok(())
    }
}
