//! Daily availability filtering.
//!
//! Per date, partitions the roster into workers who can take a shift and
//! workers excluded by vacation or a weekly rest day. Hour limits are not
//! inspected here; they belong to candidate validation.

use chrono::NaiveDate;

use crate::models::{Roster, Worker};

/// Why a worker is unavailable on a given date. Vacation takes precedence
/// when a vacation day falls on a weekly rest day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unavailability {
    /// The date is one of the worker's vacation days.
    Vacation,
    /// The date falls on one of the worker's weekly rest days.
    Rest,
}

/// The roster partitioned for one date.
#[derive(Debug, Clone)]
pub struct Availability<'a> {
    /// Workers who may be assigned a shift on the date, in name order.
    pub available: Vec<&'a Worker>,
    /// Excluded workers with their exclusion reason, in name order.
    pub excluded: Vec<(&'a Worker, Unavailability)>,
}

/// Partitions the roster for a date.
///
/// # Examples
///
/// ```
/// use shift_planner::models::{Roster, Worker};
/// use shift_planner::planning::available_workers;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let roster: Roster = [Worker {
///     name: "Carla".to_string(),
///     contracted_hours: Decimal::from(40),
///     max_hours: Decimal::from(48),
///     overtime_allowed: false,
///     weekly_rest_days: [6].into(), // Sunday
///     vacation_days: Default::default(),
/// }]
/// .into_iter()
/// .collect();
///
/// // 2024-06-02 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
/// let availability = available_workers(&roster, sunday);
/// assert!(availability.available.is_empty());
/// ```
pub fn available_workers(roster: &Roster, date: NaiveDate) -> Availability<'_> {
    let mut available = Vec::new();
    let mut excluded = Vec::new();

    for worker in roster {
        if worker.on_vacation(date) {
            excluded.push((worker, Unavailability::Vacation));
        } else if worker.rests_on_date(date) {
            excluded.push((worker, Unavailability::Rest));
        } else {
            available.push(worker);
        }
    }

    Availability {
        available,
        excluded,
    }
}
