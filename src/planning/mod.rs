//! Planning logic for the shift-assignment engine.
//!
//! This module contains the engine proper: holiday resolution, daily
//! availability filtering, minute-resolution coverage tracking, candidate
//! validation and scoring, the greedy daily allocator, and the month-level
//! driver with its seeded best-of-N search.

mod availability;
mod candidate;
mod coverage;
mod day;
mod holidays;
mod ledger;
mod month;

pub use availability::{Availability, Unavailability, available_workers};
pub use candidate::{
    BALANCE_BONUS, BASE_SCORE, CONTRACT_BONUS, Candidate, REPEAT_PENALTY, REPEAT_WINDOW_DAYS,
    generate_candidates, hours_tolerance, rank_candidates, score_candidate, within_hour_ceiling,
};
pub use coverage::CoverageTrack;
pub use day::plan_day;
pub use holidays::{default_fixed_holidays, easter_sunday, resolve_holidays};
pub use ledger::HoursLedger;
pub use month::{
    PlanOutcome, SummaryStatus, WorkerSummary, plan_month, plan_month_best_of, plan_month_seeded,
};
