//! Error types for the Work Hours Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while computing, classifying
//! or persisting work hours.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// The main error type for the Work Hours Engine.
///
/// All fallible operations return this error type. None of the variants are
/// fatal: callers are expected to decline persisting a record, or to ask the
/// user to re-enter input, and carry on.
///
/// # Example
///
/// ```
/// use work_hours_engine::error::EngineError;
///
/// let error = EngineError::InvalidShift {
///     name: "night-owl".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown shift: night-owl");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested shift name has no definition.
    #[error("Unknown shift: {name}")]
    InvalidShift {
        /// The shift name that was requested.
        name: String,
    },

    /// A shift definition violates the ordering of its time boundaries.
    #[error("Invalid shift definition '{name}': {message}")]
    InvalidShiftDefinition {
        /// The name of the offending definition.
        name: String,
        /// Which boundaries are out of order.
        message: String,
    },

    /// Clock-in time is after clock-out time.
    #[error("Invalid time range: start {start} is after end {end}")]
    InvalidTimeRange {
        /// The clock-in time.
        start: NaiveTime,
        /// The clock-out time.
        end: NaiveTime,
    },

    /// Hours handed to the ledger were negative.
    #[error("Invalid hours: effective {effective}, total {total}")]
    InvalidHours {
        /// The effective hours supplied.
        effective: f64,
        /// The total hours supplied.
        total: f64,
    },

    /// The calendar could not classify a date.
    #[error("Calendar lookup failed for {date}: {message}")]
    CalendarLookup {
        /// The date that could not be classified.
        date: NaiveDate,
        /// Why the lookup failed.
        message: String,
    },

    /// A category, or a key within a category, is not present in the store.
    #[error("{}", missing_config_message(.category, .key.as_deref()))]
    MissingConfig {
        /// The top level category.
        category: String,
        /// The sub-key, when one was requested.
        key: Option<String>,
    },

    /// The store document could not be read or written.
    #[error("Store I/O error at '{path}': {message}")]
    StoreIo {
        /// The store path.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// The store document, or a value inside it, has an unexpected shape.
    #[error("Malformed store data: {message}")]
    StoreFormat {
        /// A description of what could not be decoded.
        message: String,
    },
}

fn missing_config_message(category: &str, key: Option<&str>) -> String {
    match key {
        Some(key) => format!("Unknown config key '{}' in category '{}'", key, category),
        None => format!("Unknown config category: {}", category),
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
