//! Recurring calendar-date model.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// A day-of-month / month pair identifying a date that recurs every year,
/// such as a fixed holiday.
///
/// Displays and parses as `"dd-mm"`, the form used by the holiday calendar.
///
/// # Example
///
/// ```
/// use shift_planner::models::MonthDay;
///
/// let christmas: MonthDay = "25-12".parse().unwrap();
/// assert_eq!(christmas.to_string(), "25-12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    /// Day of month, 1-31.
    pub day: u32,
    /// Month, 1-12.
    pub month: u32,
}

impl MonthDay {
    /// Creates a month-day pair without range checking; use [`FromStr`] for
    /// validated construction from user input.
    pub fn new(day: u32, month: u32) -> Self {
        Self { day, month }
    }

    /// Returns the month-day of a full calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.day(), date.month())
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.day, self.month)
    }
}

impl FromStr for MonthDay {
    type Err = PlanError;

    fn from_str(s: &str) -> PlanResult<Self> {
        let invalid = || PlanError::InvalidHoliday {
            value: s.to_string(),
        };
        let (day_str, month_str) = s.split_once('-').ok_or_else(invalid)?;
        let day: u32 = day_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self::new(day, month))
    }
}

impl TryFrom<String> for MonthDay {
    type Error = PlanError;

    fn try_from(value: String) -> PlanResult<Self> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}
