//! Calculation history.
//!
//! Completed calculations are recorded as immutable [`HistoryEntry`] values
//! in a [`HistoryLog`] that holds the newest entry first and never grows
//! past [`HISTORY_CAPACITY`]. The [`HistoryManager`] owns the log, persists
//! it under [`HISTORY_KEY`] and pushes every change to the render boundary.

pub mod error;
mod log;
mod manager;

pub use error::HistoryError;
pub use log::{HistoryEntry, HistoryLog, HISTORY_CAPACITY};
pub use manager::{HistoryManager, HISTORY_KEY};
