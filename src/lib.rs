//! Shift-assignment engine for monthly store rosters.
//!
//! This crate turns a roster of workers, a catalog of shift windows, the
//! store's operating hours, and a holiday calendar into a day-by-day
//! assignment plan for a calendar month. Allocation is greedy and
//! coverage-driven: each day the engine fills the earliest uncovered minute
//! of the operating window with the best-scoring valid candidate, while a
//! month-scoped hours ledger enforces per-worker ceilings.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod planning;
