use serde::{Deserialize, Serialize};

use crate::Severity;

/// A single console log entry retrieved from a browser session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub timestamp: i64,
    /// Wire level name as reported by the driver. Entries without a level
    /// deserialize with an empty string and stay unclassified.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub level: String,
    pub message: String,
}

impl LogEntry {
    /// The entry's severity, if its level name is recognized.
    pub fn severity(&self) -> Option<Severity> {
        Severity::from_level(&self.level)
    }
}

/// A bounded batch of console log entries handed over per retrieval.
///
/// Deserializes from the driver's `{"value": [...]}` response envelope as
/// well as from a bare entry array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "SnapshotRepr")]
pub struct LogSnapshot {
    pub entries: Vec<LogEntry>,
}

impl LogSnapshot {
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotRepr {
    Envelope { value: Vec<LogEntry> },
    Entries(Vec<LogEntry>),
}

impl From<SnapshotRepr> for LogSnapshot {
    fn from(repr: SnapshotRepr) -> Self {
        let entries = match repr {
            SnapshotRepr::Envelope { value } => value,
            SnapshotRepr::Entries(entries) => entries,
        };
        Self { entries }
    }
}

fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_entry_roundtrip() {
        let entry = LogEntry {
            timestamp: 1700000000000,
            level: "SEVERE".into(),
            message: "Uncaught TypeError: x is not a function".into(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, parsed);
    }

    #[test]
    fn log_entry_omit_empty() {
        let entry = LogEntry {
            timestamp: 0,
            level: String::new(),
            message: "hello".into(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("timestamp"));
        assert!(!json.contains("level"));
    }

    #[test]
    fn log_entry_missing_level_is_unclassified() {
        let entry: LogEntry = serde_json::from_str(r#"{"message":"no level"}"#).unwrap();
        assert_eq!(entry.level, "");
        assert_eq!(entry.severity(), None);
    }

    #[test]
    fn log_entry_unknown_level_is_unclassified() {
        let entry: LogEntry =
            serde_json::from_str(r#"{"level":"FINEST","message":"verbose"}"#).unwrap();
        assert_eq!(entry.severity(), None);
    }

    #[test]
    fn log_entry_severity() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"timestamp":1700000000000,"level":"WARNING","message":"heads up"}"#,
        )
        .unwrap();
        assert_eq!(entry.severity(), Some(Severity::Warning));
    }

    #[test]
    fn snapshot_from_bare_array() {
        let snapshot: LogSnapshot = serde_json::from_str(
            r#"[{"level":"SEVERE","message":"boom"},{"level":"INFO","message":"ok"}]"#,
        )
        .unwrap();
        assert_eq!(snapshot.entries.len(), 2);
        assert_eq!(snapshot.entries[0].message, "boom");
    }

    #[test]
    fn snapshot_from_response_envelope() {
        let snapshot: LogSnapshot = serde_json::from_str(
            r#"{"value":[{"timestamp":1,"level":"WARNING","message":"deprecated API"}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(snapshot.entries[0].level, "WARNING");
    }

    #[test]
    fn snapshot_empty() {
        let snapshot: LogSnapshot = serde_json::from_str("[]").unwrap();
        assert!(snapshot.entries.is_empty());

        let snapshot: LogSnapshot = serde_json::from_str(r#"{"value":[]}"#).unwrap();
        assert!(snapshot.entries.is_empty());
    }
}
