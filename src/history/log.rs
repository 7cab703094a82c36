//! Capped, newest-first history log.

use super::error::HistoryError;
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in a [`HistoryLog`].
pub const HISTORY_CAPACITY: usize = 10;

/// Record of one completed calculation.
///
/// Entries are created once and never modified.
///
/// # Example
///
/// ```rust
/// use chaincalc::history::HistoryEntry;
///
/// let entry = HistoryEntry::new("5 + 3 = 8", "8");
/// assert_eq!(entry.expression(), "5 + 3 = 8");
/// assert_eq!(entry.result(), "8");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    expression: String,
    result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    /// Full expression, e.g. `"5 + 3 = 8"`.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Result as displayed, possibly the error marker.
    pub fn result(&self) -> &str {
        &self.result
    }
}

/// Ordered history, newest entry first.
///
/// The log is immutable - `record` returns a new log with the entry at
/// the front and the oldest entry dropped once the capacity is exceeded.
///
/// # Example
///
/// ```rust
/// use chaincalc::history::{HistoryEntry, HistoryLog};
///
/// let log = HistoryLog::new()
///     .record(HistoryEntry::new("1 + 1 = 2", "2"))
///     .record(HistoryEntry::new("2 × 3 = 6", "6"));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.newest().unwrap().result(), "6");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry, returning a new log.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(HISTORY_CAPACITY + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        entries.truncate(HISTORY_CAPACITY);
        Self { entries }
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode a persisted log.
    ///
    /// Logs longer than the capacity keep their newest entries.
    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        let mut log: Self = serde_json::from_str(json).map_err(HistoryError::Malformed)?;
        log.entries.truncate(HISTORY_CAPACITY);
        Ok(log)
    }

    /// Encode as a JSON array of `{expression, result}` objects.
    pub fn to_json(&self) -> Result<String, HistoryError> {
        serde_json::to_string(self).map_err(HistoryError::SerializationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new(format!("{n} + 0 = {n}"), n.to_string())
    }

    #[test]
    fn new_log_is_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert!(log.newest().is_none());
    }

    #[test]
    fn record_puts_newest_first() {
        let log = HistoryLog::new().record(entry(1)).record(entry(2));
        assert_eq!(log.entries(), &[entry(2), entry(1)]);
    }

    #[test]
    fn record_is_immutable() {
        let log = HistoryLog::new();
        let new_log = log.record(entry(1));

        assert_eq!(log.len(), 0);
        assert_eq!(new_log.len(), 1);
    }

    #[test]
    fn record_evicts_oldest_past_capacity() {
        let log = (1..=11).fold(HistoryLog::new(), |log, n| log.record(entry(n)));

        assert_eq!(log.len(), HISTORY_CAPACITY);
        assert_eq!(log.newest(), Some(&entry(11)));
        assert!(!log.entries().contains(&entry(1)));
        assert_eq!(log.entries().last(), Some(&entry(2)));
    }

    #[test]
    fn serializes_as_plain_array() {
        let log = HistoryLog::new().record(HistoryEntry::new("5 + 3 = 8", "8"));
        let json = log.to_json().unwrap();
        assert_eq!(json, r#"[{"expression":"5 + 3 = 8","result":"8"}]"#);
    }

    #[test]
    fn from_json_reads_array() {
        let json = r#"[{"expression":"2 × 2 = 4","result":"4"},{"expression":"1 + 1 = 2","result":"2"}]"#;
        let log = HistoryLog::from_json(json).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.newest().unwrap().expression(), "2 × 2 = 4");
    }

    #[test]
    fn from_json_truncates_oversized_logs() {
        let entries: Vec<HistoryEntry> = (0..15).map(entry).collect();
        let json = serde_json::to_string(&entries).unwrap();

        let log = HistoryLog::from_json(&json).unwrap();
        assert_eq!(log.len(), HISTORY_CAPACITY);
        assert_eq!(log.newest(), Some(&entry(0)));
    }

    #[test]
    fn from_json_rejects_malformed_data() {
        assert!(matches!(
            HistoryLog::from_json("not json"),
            Err(HistoryError::Malformed(_))
        ));
        assert!(matches!(
            HistoryLog::from_json(r#"{"expression":"x"}"#),
            Err(HistoryError::Malformed(_))
        ));
    }
}
