//! Per-day outcomes and the month schedule.
//!
//! This module defines the [`DayOutcome`] tagged variant recording what a
//! worker does on a given day, the [`DaySchedule`] holding one day's
//! outcomes, and the [`MonthSchedule`] assembled over a full run. The
//! `Display` forms of [`DayOutcome`] are the contract consumed by export
//! and reporting collaborators.

use std::collections::BTreeMap;
use std::collections::btree_map;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::shift_window::minutes_from_midnight;

/// What one worker does on one day. Exactly one outcome applies per worker
/// per day; the categories are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayOutcome {
    /// Assigned to a shift window.
    Shift {
        /// Start of the assigned window.
        start: NaiveTime,
        /// End of the assigned window.
        end: NaiveTime,
    },
    /// On vacation.
    Vacation,
    /// On a weekly rest day.
    Rest,
    /// The date is a holiday; the store is closed.
    Holiday,
    /// Available but idle while the day ended with a coverage gap.
    CoverageError {
        /// The earliest minute of the operating window left uncovered.
        first_uncovered: NaiveTime,
    },
}

impl DayOutcome {
    /// Returns the assigned window bounds if this outcome is a shift.
    pub fn shift(&self) -> Option<(NaiveTime, NaiveTime)> {
        match self {
            DayOutcome::Shift { start, end } => Some((*start, *end)),
            _ => None,
        }
    }

    /// Returns the hours worked under this outcome: the shift duration for
    /// a [`DayOutcome::Shift`], zero otherwise.
    pub fn hours(&self) -> Decimal {
        match self.shift() {
            Some((start, end)) => {
                let minutes = minutes_from_midnight(end) - minutes_from_midnight(start);
                Decimal::from(minutes) / Decimal::from(60)
            }
            None => Decimal::ZERO,
        }
    }
}

impl std::fmt::Display for DayOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayOutcome::Shift { start, end } => {
                write!(f, "{}-{}", start.format("%H:%M"), end.format("%H:%M"))
            }
            DayOutcome::Vacation => write!(f, "VACATION"),
            DayOutcome::Rest => write!(f, "REST"),
            DayOutcome::Holiday => write!(f, "HOLIDAY"),
            DayOutcome::CoverageError { first_uncovered } => {
                write!(f, "COVERAGE_ERROR:{}", first_uncovered.format("%H:%M"))
            }
        }
    }
}

/// One day's outcomes, keyed by worker name.
///
/// `first_uncovered` is set whenever the allocator finished the day with a
/// coverage gap. It is carried alongside the per-worker outcomes because a
/// partial day can leave every available worker holding a `Shift` (e.g. a
/// single worker exhausting their hour ceiling against a longer operating
/// window), so the gap is not always visible in the map alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    outcomes: BTreeMap<String, DayOutcome>,
    first_uncovered: Option<NaiveTime>,
}

impl DaySchedule {
    /// Creates an empty day schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a worker's outcome for the day, replacing any previous one.
    pub fn record(&mut self, worker: &str, outcome: DayOutcome) {
        self.outcomes.insert(worker.to_string(), outcome);
    }

    /// Returns the recorded outcome for a worker, if any.
    pub fn outcome(&self, worker: &str) -> Option<&DayOutcome> {
        self.outcomes.get(worker)
    }

    /// Returns the assigned window for a worker, if the worker holds a
    /// shift this day.
    pub fn shift(&self, worker: &str) -> Option<(NaiveTime, NaiveTime)> {
        self.outcomes.get(worker).and_then(DayOutcome::shift)
    }

    /// Iterates over `(worker, outcome)` pairs in worker-name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, DayOutcome> {
        self.outcomes.iter()
    }

    /// Marks the day as partially covered from the given minute onward.
    pub fn set_first_uncovered(&mut self, time: NaiveTime) {
        self.first_uncovered = Some(time);
    }

    /// Returns the earliest uncovered minute if the day ended with a gap.
    pub fn first_uncovered(&self) -> Option<NaiveTime> {
        self.first_uncovered
    }

    /// Returns true if the day ended with a coverage gap.
    pub fn has_coverage_error(&self) -> bool {
        self.first_uncovered.is_some()
            || self
                .outcomes
                .values()
                .any(|o| matches!(o, DayOutcome::CoverageError { .. }))
    }
}

impl<'a> IntoIterator for &'a DaySchedule {
    type Item = (&'a String, &'a DayOutcome);
    type IntoIter = btree_map::Iter<'a, String, DayOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

/// The full result of a month run: an ordered mapping from day number
/// (1..=days in month) to that day's outcomes.
///
/// This structure is the entire contract exposed to export and reporting
/// collaborators; it is immutable once the run returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSchedule {
    year: i32,
    month: u32,
    days: BTreeMap<u32, DaySchedule>,
}

impl MonthSchedule {
    /// Creates an empty schedule for the given year and month.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            days: BTreeMap::new(),
        }
    }

    /// The year this schedule covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month (1-12) this schedule covers.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Inserts a day's schedule, replacing any previous entry for that day.
    pub fn insert_day(&mut self, day: u32, schedule: DaySchedule) {
        self.days.insert(day, schedule);
    }

    /// Returns the schedule for a day number, if planned.
    pub fn day(&self, day: u32) -> Option<&DaySchedule> {
        self.days.get(&day)
    }

    /// Iterates over `(day, schedule)` pairs in day order.
    pub fn days(&self) -> btree_map::Iter<'_, u32, DaySchedule> {
        self.days.iter()
    }

    /// Day numbers that ended with a coverage gap, in ascending order.
    pub fn gap_days(&self) -> Vec<u32> {
        self.days
            .iter()
            .filter(|(_, sched)| sched.has_coverage_error())
            .map(|(day, _)| *day)
            .collect()
    }

    /// The number of days that ended with a coverage gap.
    pub fn gap_count(&self) -> usize {
        self.days
            .values()
            .filter(|sched| sched.has_coverage_error())
            .count()
    }

    /// Total hours assigned to a worker across the month so far.
    pub fn assigned_hours(&self, worker: &str) -> Decimal {
        self.days
            .values()
            .filter_map(|sched| sched.outcome(worker))
            .map(DayOutcome::hours)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn shift(start: (u32, u32), end: (u32, u32)) -> DayOutcome {
        DayOutcome::Shift {
            start: time(start.0, start.1),
            end: time(end.0, end.1),
        }
    }

    #[test]
    fn test_outcome_display_contract_strings() {
        assert_eq!(shift((8, 0), (14, 0)).to_string(), "08:00-14:00");
        assert_eq!(DayOutcome::Vacation.to_string(), "VACATION");
        assert_eq!(DayOutcome::Rest.to_string(), "REST");
        assert_eq!(DayOutcome::Holiday.to_string(), "HOLIDAY");
        assert_eq!(
            DayOutcome::CoverageError {
                first_uncovered: time(14, 0)
            }
            .to_string(),
            "COVERAGE_ERROR:14:00"
        );
    }

    #[test]
    fn test_outcome_hours() {
        assert_eq!(shift((8, 0), (14, 0)).hours(), Decimal::from(6));
        assert_eq!(shift((14, 0), (21, 0)).hours(), Decimal::from(7));
        assert_eq!(shift((8, 0), (14, 30)).hours(), Decimal::new(65, 1));
        assert_eq!(DayOutcome::Rest.hours(), Decimal::ZERO);
    }

    #[test]
    fn test_day_schedule_records_and_replaces() {
        let mut day = DaySchedule::new();
        day.record("Anna", DayOutcome::Rest);
        day.record("Anna", shift((8, 0), (14, 0)));
        assert_eq!(day.shift("Anna"), Some((time(8, 0), time(14, 0))));
        assert_eq!(day.iter().count(), 1);
    }

    #[test]
    fn test_day_coverage_error_via_marker() {
        let mut day = DaySchedule::new();
        day.record("Anna", shift((8, 0), (14, 0)));
        assert!(!day.has_coverage_error());
        day.set_first_uncovered(time(14, 0));
        assert!(day.has_coverage_error());
    }

    #[test]
    fn test_day_coverage_error_via_outcome() {
        let mut day = DaySchedule::new();
        day.record(
            "Bruno",
            DayOutcome::CoverageError {
                first_uncovered: time(14, 0),
            },
        );
        assert!(day.has_coverage_error());
    }

    #[test]
    fn test_month_gap_days_in_order() {
        let mut schedule = MonthSchedule::new(2024, 6);
        for day in 1..=3 {
            schedule.insert_day(day, DaySchedule::new());
        }
        let mut partial = DaySchedule::new();
        partial.set_first_uncovered(time(14, 0));
        schedule.insert_day(2, partial);
        assert_eq!(schedule.gap_days(), vec![2]);
        assert_eq!(schedule.gap_count(), 1);
    }

    #[test]
    fn test_month_assigned_hours_accumulates() {
        let mut schedule = MonthSchedule::new(2024, 6);
        let mut day1 = DaySchedule::new();
        day1.record("Anna", shift((8, 0), (14, 0)));
        let mut day2 = DaySchedule::new();
        day2.record("Anna", shift((14, 0), (21, 0)));
        day2.record("Bruno", DayOutcome::Rest);
        schedule.insert_day(1, day1);
        schedule.insert_day(2, day2);
        assert_eq!(schedule.assigned_hours("Anna"), Decimal::from(13));
        assert_eq!(schedule.assigned_hours("Bruno"), Decimal::ZERO);
    }

    #[test]
    fn test_month_schedule_serialization_round_trip() {
        let mut schedule = MonthSchedule::new(2024, 6);
        let mut day = DaySchedule::new();
        day.record("Anna", shift((8, 0), (14, 0)));
        day.record("Bruno", DayOutcome::Vacation);
        schedule.insert_day(1, day);

        let json = serde_json::to_string(&schedule).unwrap();
        let back: MonthSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, back);
    }
}
