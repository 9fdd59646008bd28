//! Worker and roster models.
//!
//! This module defines the [`Worker`] struct describing one roster member's
//! contractual limits and availability constraints, and the [`Roster`]
//! collection that owns them.

use std::collections::BTreeSet;
use std::collections::btree_map::{self, BTreeMap};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a worker subject to shift assignment.
///
/// The engine treats workers as read-only for the duration of a run; all
/// mutable planning state lives in the run's own ledger and schedule.
///
/// # Example
///
/// ```
/// use shift_planner::models::Worker;
/// use rust_decimal::Decimal;
///
/// let worker = Worker {
///     name: "Anna".to_string(),
///     contracted_hours: Decimal::from(40),
///     max_hours: Decimal::from(48),
///     overtime_allowed: false,
///     weekly_rest_days: [6].into(),
///     vacation_days: Default::default(),
/// };
/// assert!(worker.rests_on(chrono::Weekday::Sun));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique name identifying the worker.
    pub name: String,
    /// Target hours for the month under the worker's contract.
    pub contracted_hours: Decimal,
    /// Hard ceiling on assignable hours for the month.
    pub max_hours: Decimal,
    /// Whether assignments may exceed `max_hours`.
    #[serde(default)]
    pub overtime_allowed: bool,
    /// Weekday indices on which the worker rests (0 = Monday .. 6 = Sunday).
    #[serde(default)]
    pub weekly_rest_days: BTreeSet<u8>,
    /// Calendar dates on which the worker is on vacation.
    #[serde(default)]
    pub vacation_days: BTreeSet<NaiveDate>,
}

impl Worker {
    /// Returns true if the given date is one of the worker's vacation days.
    pub fn on_vacation(&self, date: NaiveDate) -> bool {
        self.vacation_days.contains(&date)
    }

    /// Returns true if the worker's weekly rest days include the given
    /// weekday.
    pub fn rests_on(&self, weekday: chrono::Weekday) -> bool {
        self.weekly_rest_days
            .contains(&(weekday.num_days_from_monday() as u8))
    }

    /// Returns true if the given date falls on one of the worker's weekly
    /// rest days.
    pub fn rests_on_date(&self, date: NaiveDate) -> bool {
        self.rests_on(date.weekday())
    }
}

/// The immutable collection of workers supplied to a planning run.
///
/// Workers are kept sorted by name so that every iteration over the roster
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    workers: BTreeMap<String, Worker>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a worker, keyed by its name. A worker with the same name is
    /// replaced.
    pub fn insert(&mut self, worker: Worker) {
        self.workers.insert(worker.name.clone(), worker);
    }

    /// Looks up a worker by name.
    pub fn get(&self, name: &str) -> Option<&Worker> {
        self.workers.get(name)
    }

    /// Returns the number of workers on the roster.
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Returns true if the roster has no workers.
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Iterates over workers in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Worker> {
        self.workers.values()
    }
}

impl FromIterator<Worker> for Roster {
    fn from_iter<I: IntoIterator<Item = Worker>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for worker in iter {
            roster.insert(worker);
        }
        roster
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Worker;
    type IntoIter = btree_map::Values<'a, String, Worker>;

    fn into_iter(self) -> Self::IntoIter {
        self.workers.values()
    }
}
