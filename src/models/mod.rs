//! Core data models for the shift planner.
//!
//! This module contains all the domain models used throughout the engine.

mod calendar;
mod outcome;
mod shift_window;
mod snapshot;
mod store_hours;
mod worker;

pub use calendar::MonthDay;
pub use outcome::{DayOutcome, DaySchedule, MonthSchedule};
pub use shift_window::{ShiftWindow, minutes_from_midnight, parse_hhmm};
pub use snapshot::PlanningSnapshot;
pub use store_hours::StoreHours;
pub use worker::{Roster, Worker};
