//! Error types for the shift planner.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all fatal conditions that can occur before a planning run starts.
//! Expected shortfalls during a run (no available workers, coverage gaps)
//! are encoded in the output schedule and are never surfaced as errors.

use thiserror::Error;

/// The main error type for the shift planner.
///
/// All fallible operations in the crate return this error type. Every
/// variant describes invalid static configuration; once a month run has
/// started, no further errors are produced.
///
/// # Example
///
/// ```
/// use shift_planner::error::PlanError;
///
/// let error = PlanError::ConfigNotFound {
///     path: "/missing/plan.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/plan.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PlanError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time-of-day string was not in `HH:MM` form.
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTime {
        /// The string that failed to parse.
        value: String,
    },

    /// A shift window was inconsistent or fell outside store hours.
    #[error("Invalid shift window {start}-{end}: {message}")]
    InvalidShiftWindow {
        /// The start time of the offending window.
        start: String,
        /// The end time of the offending window.
        end: String,
        /// A description of what made the window invalid.
        message: String,
    },

    /// Store hours with a closing time not after the opening time.
    #[error("Invalid store hours {open}-{close}: close must be after open")]
    InvalidStoreHours {
        /// The configured opening time.
        open: String,
        /// The configured closing time.
        close: String,
    },

    /// A worker record was invalid or contained inconsistent data.
    #[error("Invalid worker '{name}': {message}")]
    InvalidWorker {
        /// The name of the invalid worker.
        name: String,
        /// A description of what made the worker invalid.
        message: String,
    },

    /// A fixed-holiday entry was not in `dd-mm` form.
    #[error("Invalid holiday '{value}': expected dd-mm")]
    InvalidHoliday {
        /// The string that failed to parse.
        value: String,
    },

    /// The requested year/month does not name a valid calendar month.
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month (1-12 is valid).
        month: u32,
    },
}

/// A type alias for Results that return [`PlanError`].
pub type PlanResult<T> = Result<T, PlanError>;
