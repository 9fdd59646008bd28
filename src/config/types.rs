//! Raw configuration types for the shift planner.
//!
//! These structures mirror the YAML document shape; times stay as
//! `HH:MM` strings here and are parsed and validated when the config is
//! turned into a [`PlanningSnapshot`](crate::models::PlanningSnapshot).

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Store operating hours as configured.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreHoursConfig {
    /// Daily opening time, `HH:MM`.
    pub open: String,
    /// Daily closing time, `HH:MM`.
    pub close: String,
}

/// One shift catalog entry as configured.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftConfig {
    /// Window start, `HH:MM`.
    pub start: String,
    /// Window end, `HH:MM`.
    pub end: String,
}

/// One worker as configured; the worker's name is the map key in
/// [`PlanConfig::workers`].
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerConfig {
    /// Target hours for the month under the worker's contract.
    pub contracted_hours: Decimal,
    /// Hard ceiling on assignable hours for the month.
    pub max_hours: Decimal,
    /// Whether assignments may exceed the ceiling.
    #[serde(default)]
    pub overtime_allowed: bool,
    /// Weekday indices on which the worker rests (0 = Monday .. 6 = Sunday).
    #[serde(default)]
    pub weekly_rest_days: BTreeSet<u8>,
    /// Calendar dates on which the worker is on vacation.
    #[serde(default)]
    pub vacation_days: BTreeSet<NaiveDate>,
}

/// The full planning configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanConfig {
    /// The store's daily operating window.
    pub store_hours: StoreHoursConfig,
    /// The shift catalog, in document order.
    pub shifts: Vec<ShiftConfig>,
    /// Fixed holidays as `dd-mm` strings. When omitted, the default
    /// Italian national list applies.
    #[serde(default)]
    pub fixed_holidays: Option<Vec<String>>,
    /// Workers keyed by unique name.
    pub workers: BTreeMap<String, WorkerConfig>,
}
