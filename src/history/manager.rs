//! Owner of the history log.

use super::error::HistoryError;
use super::log::{HistoryEntry, HistoryLog};
use crate::render::Render;
use crate::store::KeyValueStore;
use tracing::{debug, info, warn};

/// Store key holding the serialized history log.
pub const HISTORY_KEY: &str = "calculator_history";

/// Maintains the history log and keeps the persisted copy in sync.
///
/// This is the only writer of the log. Every change is written to the
/// store and announced to the render boundary. Store failures are logged
/// and otherwise ignored; the in-memory log stays authoritative.
pub struct HistoryManager<St: KeyValueStore> {
    log: HistoryLog,
    store: St,
}

impl<St: KeyValueStore> HistoryManager<St> {
    /// Load the persisted log from `store`.
    ///
    /// Missing, unreadable or malformed data yields an empty log.
    pub fn load(store: St) -> Self {
        let log = match Self::read_log(&store) {
            Ok(log) => log,
            Err(e) => {
                warn!(error = %e, "discarding persisted history");
                HistoryLog::new()
            }
        };
        info!(entries = log.len(), "history loaded");
        Self { log, store }
    }

    fn read_log(store: &St) -> Result<HistoryLog, HistoryError> {
        match store.read_string(HISTORY_KEY)? {
            Some(json) => HistoryLog::from_json(&json),
            None => Ok(HistoryLog::new()),
        }
    }

    /// Add a completed calculation at the front of the log.
    pub fn append<R: Render>(
        &mut self,
        expression: impl Into<String>,
        result: impl Into<String>,
        render: &mut R,
    ) {
        let entry = HistoryEntry::new(expression, result);
        debug!(expression = entry.expression(), "history append");
        self.log = self.log.record(entry);
        self.persist();
        self.publish(render);
    }

    /// Empty the log and the persisted copy.
    pub fn clear_all<R: Render>(&mut self, render: &mut R) {
        self.log = HistoryLog::new();
        self.persist();
        info!("history cleared");
        self.publish(render);
    }

    /// Push the current log to `render`.
    pub fn publish<R: Render>(&self, render: &mut R) {
        render.on_history_changed(self.log.entries());
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        self.log.entries()
    }

    pub fn log(&self) -> &HistoryLog {
        &self.log
    }

    /// One line per entry, newest first.
    pub fn render_lines(&self) -> Vec<String> {
        self.log
            .entries()
            .iter()
            .map(|entry| entry.expression().to_string())
            .collect()
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    /// Give the store back, e.g. to reload from it.
    pub fn into_store(self) -> St {
        self.store
    }

    fn persist(&mut self) {
        let written = self.log.to_json().and_then(|json| {
            self.store
                .write_string(HISTORY_KEY, &json)
                .map_err(HistoryError::from)
        });
        if let Err(e) = written {
            warn!(error = %e, "failed to persist history");
        }
    }
}
