//! Render boundary.
//!
//! The core pushes display updates out through [`Render`] and never reads
//! anything back. Front ends implement it to draw the display and the
//! history panel.

use crate::history::HistoryEntry;

/// Receiver for display updates.
pub trait Render {
    /// Called after every engine action with the main and secondary display.
    fn on_state_changed(&mut self, current_entry: &str, previous_display: &str);

    /// Called whenever the history log changes, newest entry first.
    fn on_history_changed(&mut self, entries: &[HistoryEntry]);
}

impl<R: Render + ?Sized> Render for &mut R {
    fn on_state_changed(&mut self, current_entry: &str, previous_display: &str) {
        (**self).on_state_changed(current_entry, previous_display);
    }

    fn on_history_changed(&mut self, entries: &[HistoryEntry]) {
        (**self).on_history_changed(entries);
    }
}

impl<R: Render + ?Sized> Render for Box<R> {
    fn on_state_changed(&mut self, current_entry: &str, previous_display: &str) {
        (**self).on_state_changed(current_entry, previous_display);
    }

    fn on_history_changed(&mut self, entries: &[HistoryEntry]) {
        (**self).on_history_changed(entries);
    }
}

/// Discards every update.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRender;

impl Render for NullRender {
    fn on_state_changed(&mut self, _current_entry: &str, _previous_display: &str) {}

    fn on_history_changed(&mut self, _entries: &[HistoryEntry]) {}
}

/// Keeps every update it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingRender {
    /// `(current_entry, previous_display)` pairs
    pub states: Vec<(String, String)>,
    /// Snapshots of the history log
    pub histories: Vec<Vec<HistoryEntry>>,
}

impl RecordingRender {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent display update.
    pub fn last_state(&self) -> Option<(&str, &str)> {
        self.states
            .last()
            .map(|(entry, previous)| (entry.as_str(), previous.as_str()))
    }

    /// The most recent history snapshot.
    pub fn last_history(&self) -> Option<&[HistoryEntry]> {
        self.histories.last().map(Vec::as_slice)
    }
}

impl Render for RecordingRender {
    fn on_state_changed(&mut self, current_entry: &str, previous_display: &str) {
        self.states
            .push((current_entry.to_string(), previous_display.to_string()));
    }

    fn on_history_changed(&mut self, entries: &[HistoryEntry]) {
        self.histories.push(entries.to_vec());
    }
}
