//! Store module — encrypted account storage.
//!
//! This module provides:
//! - the `AccountRecord` type (`account`)
//! - the record serializer, record ⇄ JSON line (`codec`)
//! - the line-oriented encrypted file format with atomic rewrite
//!   (`format`)
//! - the high-level `Store` for creating, opening, and saving stores
//!   (`store`)

pub mod account;
pub mod codec;
pub mod format;
pub mod store;

// Re-export the most commonly used items.
pub use account::AccountRecord;
pub use format::{StoreHeader, StoredArgon2Params};
pub use store::Store;
