//! Store operating-hours model.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

use super::shift_window::{minutes_from_midnight, parse_hhmm};

/// The store's daily operating window.
///
/// Every minute in `[open, close)` must be staffed for a day to count as
/// fully covered. The invariant `open < close` is enforced at parse and
/// snapshot validation; overnight operating windows are not supported.
///
/// # Example
///
/// ```
/// use shift_planner::models::StoreHours;
///
/// let hours = StoreHours::parse("08:00", "21:00").unwrap();
/// assert_eq!(hours.span_minutes(), 13 * 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHours {
    /// The daily opening time.
    pub open: NaiveTime,
    /// The daily closing time.
    pub close: NaiveTime,
}

impl StoreHours {
    /// Creates store hours from two times, checking `open < close`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidStoreHours`] when the closing time does
    /// not fall after the opening time.
    pub fn new(open: NaiveTime, close: NaiveTime) -> PlanResult<Self> {
        if close <= open {
            return Err(PlanError::InvalidStoreHours {
                open: open.format("%H:%M").to_string(),
                close: close.format("%H:%M").to_string(),
            });
        }
        Ok(Self { open, close })
    }

    /// Parses store hours from two `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidTime`] when either bound fails to parse,
    /// or [`PlanError::InvalidStoreHours`] when `close <= open`.
    pub fn parse(open: &str, close: &str) -> PlanResult<Self> {
        Self::new(parse_hhmm(open)?, parse_hhmm(close)?)
    }

    /// Returns the opening time as minutes from midnight.
    pub fn open_minute(&self) -> u32 {
        minutes_from_midnight(self.open)
    }

    /// Returns the closing time as minutes from midnight.
    pub fn close_minute(&self) -> u32 {
        minutes_from_midnight(self.close)
    }

    /// Returns the length of the operating window in minutes.
    pub fn span_minutes(&self) -> u32 {
        self.close_minute() - self.open_minute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_hours() {
        let hours = StoreHours::parse("08:00", "21:00").unwrap();
        assert_eq!(hours.open_minute(), 480);
        assert_eq!(hours.close_minute(), 1260);
        assert_eq!(hours.span_minutes(), 780);
    }

    #[test]
    fn test_rejects_close_before_open() {
        let error = StoreHours::parse("21:00", "08:00").unwrap_err();
        assert!(matches!(error, PlanError::InvalidStoreHours { .. }));
    }

    #[test]
    fn test_rejects_close_equal_to_open() {
        assert!(StoreHours::parse("08:00", "08:00").is_err());
    }

    #[test]
    fn test_rejects_malformed_time() {
        assert!(matches!(
            StoreHours::parse("8am", "21:00").unwrap_err(),
            PlanError::InvalidTime { .. }
        ));
    }
}
