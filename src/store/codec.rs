//! Record serializer — one account record ⇄ one JSON line.
//!
//! Earlier format versions packed records as `/key=value/` tokens and
//! located fields by scanning for the key names, so any value
//! containing a `/` or a string like `password=` corrupted parsing.
//! JSON escaping makes the encoding immune to field-content collisions
//! while keeping the same logical fields:
//! `title`, `username`, `password`, `note`, `type`, `url`, `time`.

use crate::errors::{PassVaultError, Result};
use crate::store::account::AccountRecord;

/// Serialize a record to its plaintext line form.
pub fn encode_record(record: &AccountRecord) -> Result<String> {
    serde_json::to_string(record)
        .map_err(|e| PassVaultError::SerializationError(format!("record: {e}")))
}

/// Parse a decrypted line back into a record.
///
/// A line that is not a record-shaped JSON object, or a record with an
/// empty title, signals file corruption or a format mismatch.
pub fn decode_record(line: &str) -> Result<AccountRecord> {
    let record: AccountRecord = serde_json::from_str(line)
        .map_err(|e| PassVaultError::MalformedRecord(format!("record JSON: {e}")))?;

    if record.title.is_empty() {
        return Err(PassVaultError::MalformedRecord(
            "record has an empty title".into(),
        ));
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AccountRecord {
        AccountRecord {
            title: "Bank".into(),
            username: "alice".into(),
            password: "p@ss".into(),
            note: String::new(),
            kind: "login".into(),
            url: "bank.com".into(),
            last_modified: 1_700_000_000_000,
        }
    }

    #[test]
    fn roundtrip_preserves_all_fields() {
        let record = sample();
        let line = encode_record(&record).unwrap();
        let decoded = decode_record(&line).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn wire_names_are_stable() {
        let line = encode_record(&sample()).unwrap();
        // `kind` and `last_modified` keep their historical wire names.
        assert!(line.contains("\"type\":\"login\""));
        assert!(line.contains("\"time\":1700000000000"));
    }

    #[test]
    fn hostile_field_values_roundtrip() {
        // Every value that broke the old /key=value/ token format.
        let mut record = sample();
        record.username = "a/b=c".into();
        record.note = "/password=evil/ and a \"quote\" and a\nnewline".into();
        record.url = "https://x.test/path?title=1".into();

        let line = encode_record(&record).unwrap();
        // The raw newline must be escaped — the file is line-oriented.
        assert!(!line.contains('\n'));

        let decoded = decode_record(&line).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn rejects_non_record_json() {
        assert!(decode_record("[1,2,3]").is_err());
        assert!(decode_record("not json at all").is_err());
        assert!(decode_record("{\"title\":\"x\"}").is_err());
    }

    #[test]
    fn rejects_empty_title() {
        let mut record = sample();
        record.title = String::new();
        let line = encode_record(&record).unwrap();
        assert!(decode_record(&line).is_err());
    }
}
