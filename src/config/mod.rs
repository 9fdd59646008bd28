//! Configuration for the shift planner.
//!
//! A planning run is configured by a single YAML document describing the
//! store hours, the shift catalog, the fixed-holiday list, and the
//! roster. See [`PlanConfig::load`].

mod loader;
mod types;

pub use types::{PlanConfig, ShiftConfig, StoreHoursConfig, WorkerConfig};
