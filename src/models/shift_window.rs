//! Shift window model and time-of-day helpers.
//!
//! This module defines the [`ShiftWindow`] struct representing a catalog
//! entry, plus the `HH:MM` parsing helpers shared across the crate.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// Parses a time-of-day string in `HH:MM` form.
///
/// # Errors
///
/// Returns [`PlanError::InvalidTime`] if the string is not a valid
/// 24-hour `HH:MM` time.
///
/// # Examples
///
/// ```
/// use shift_planner::models::parse_hhmm;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_hhmm("08:30").unwrap(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
/// assert!(parse_hhmm("25:00").is_err());
/// ```
pub fn parse_hhmm(value: &str) -> PlanResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| PlanError::InvalidTime {
        value: value.to_string(),
    })
}

/// Returns the number of minutes from midnight for a time-of-day.
///
/// Seconds are discarded; the engine works at minute resolution.
pub fn minutes_from_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Represents one entry of the shift catalog: a start/end time-of-day pair
/// at minute precision.
///
/// Windows are immutable once the planning snapshot is validated; the
/// invariant `open <= start < end <= close` against the store hours is
/// checked by [`PlanningSnapshot::validate`](crate::models::PlanningSnapshot::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// The start time of the window.
    pub start: NaiveTime,
    /// The end time of the window.
    pub end: NaiveTime,
}

impl ShiftWindow {
    /// Creates a shift window from two times.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parses a shift window from two `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidTime`] when either bound fails to
    /// parse, or [`PlanError::InvalidShiftWindow`] when the end does not
    /// fall after the start.
    pub fn parse(start: &str, end: &str) -> PlanResult<Self> {
        let window = Self::new(parse_hhmm(start)?, parse_hhmm(end)?);
        if window.end <= window.start {
            return Err(PlanError::InvalidShiftWindow {
                start: start.to_string(),
                end: end.to_string(),
                message: "end must be after start".to_string(),
            });
        }
        Ok(window)
    }

    /// Returns the start as minutes from midnight.
    pub fn start_minute(&self) -> u32 {
        minutes_from_midnight(self.start)
    }

    /// Returns the end as minutes from midnight.
    pub fn end_minute(&self) -> u32 {
        minutes_from_midnight(self.end)
    }

    /// Returns the duration of the window in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute().saturating_sub(self.start_minute())
    }

    /// Returns the duration of the window in hours as a Decimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_planner::models::ShiftWindow;
    /// use rust_decimal::Decimal;
    ///
    /// let window = ShiftWindow::parse("08:00", "14:30").unwrap();
    /// assert_eq!(window.hours(), Decimal::new(65, 1)); // 6.5 hours
    /// ```
    pub fn hours(&self) -> Decimal {
        Decimal::from(self.duration_minutes()) / Decimal::from(60)
    }

    /// Returns true if the given minute from midnight falls inside the
    /// half-open interval `[start, end)`.
    pub fn covers_minute(&self, minute: u32) -> bool {
        self.start_minute() <= minute && minute < self.end_minute()
    }
}

impl std::fmt::Display for ShiftWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
