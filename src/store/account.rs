//! The account record type stored inside a store.
//!
//! The title is the record's identity: the store keeps records in a
//! map keyed by title, and a later write under the same title replaces
//! the earlier one.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single stored account entry.
///
/// All fields are plain strings except `last_modified`, which is an
/// epoch-millisecond timestamp (serialized as `time`).  The `kind`
/// field is serialized as `type`, the name the format has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Unique, non-empty title identifying the account.
    pub title: String,

    pub username: String,

    pub password: String,

    pub note: String,

    /// Free-form account category (e.g. "login", "card", "wifi").
    #[serde(rename = "type")]
    pub kind: String,

    pub url: String,

    /// Last modification time in epoch milliseconds.
    #[serde(rename = "time")]
    pub last_modified: i64,
}

impl AccountRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        title: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        note: impl Into<String>,
        kind: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            username: username.into(),
            password: password.into(),
            note: note.into(),
            kind: kind.into(),
            url: url.into(),
            last_modified: Utc::now().timestamp_millis(),
        }
    }

    /// Bump `last_modified` to the current time.
    pub fn touch(&mut self) {
        self.last_modified = Utc::now().timestamp_millis();
    }

    /// The last-modified timestamp as a `DateTime`, if representable.
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.last_modified).single()
    }
}
