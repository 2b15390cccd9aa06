//! Error types for grid configuration and user-supplied data.
//!
//! The input state machines never fail; these cover the edges where the
//! crate accepts data from outside: settings files, day keys, time strings.

use thiserror::Error;

/// Errors that can occur while configuring or feeding a grid
#[derive(Error, Debug)]
pub enum GridError {
    /// Slot length does not tile an hour
    #[error("Invalid granularity: {0} minutes (must be 1-60 and divide 60)")]
    InvalidGranularity(u16),

    /// Hour window is empty or past midnight
    #[error("Invalid hour window: {start}..{end} (need start < end <= 24)")]
    InvalidHourWindow { start: u8, end: u8 },

    /// Slot index outside the column
    #[error("Slot {index} out of range (column has {count} slots)")]
    SlotOutOfRange { index: u16, count: u16 },

    /// Time string not in `HH:MM` form or outside the column window
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// Day key string not in `YYYY-MM-DD` form
    #[error("Invalid day key: {0}")]
    InvalidDayKey(String),

    /// Routed event names a day that is not mounted
    #[error("Unknown day: {0}")]
    UnknownDay(String),

    /// A threshold that must be positive was not
    #[error("Invalid threshold {name}: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File watcher failure
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for grid operations
pub type Result<T> = std::result::Result<T, GridError>;
