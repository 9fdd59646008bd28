//! Month-level planning driver.
//!
//! Iterates the days of a calendar month, short-circuits holidays, runs
//! the daily allocator for working days, and assembles the final
//! [`MonthSchedule`] together with an informational per-worker summary.
//! Also hosts the seeded best-of-N search that retries tie-breaking with
//! different seeds and keeps the attempt with the fewest coverage gaps.

use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PlanError, PlanResult};
use crate::models::{DayOutcome, DaySchedule, MonthDay, MonthSchedule, PlanningSnapshot};

use super::candidate::hours_tolerance;
use super::day::plan_day;
use super::holidays::resolve_holidays;
use super::ledger::HoursLedger;

/// How a worker's month compares against their contractual limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryStatus {
    /// Hours fall between contract and ceiling.
    Ok,
    /// Ceiling exceeded without overtime authorization. Indicates a
    /// validator defect; the allocator must never produce this.
    OverMax,
    /// Ceiling exceeded under overtime authorization.
    Overtime,
    /// Assigned hours fall short of the contract.
    UnderContract,
}

/// Informational per-worker recap computed after the month is planned.
///
/// Purely diagnostic: it never alters the schedule and exists for export
/// and reporting collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerSummary {
    /// The worker's name.
    pub worker: String,
    /// Total hours assigned this month.
    pub hours_worked: Decimal,
    /// The worker's contracted hours.
    pub contracted_hours: Decimal,
    /// The worker's hour ceiling.
    pub max_hours: Decimal,
    /// How the totals compare.
    pub status: SummaryStatus,
}

/// The complete result of a month run.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    /// The day-by-day assignment plan.
    pub schedule: MonthSchedule,
    /// The final hours ledger.
    pub ledger: HoursLedger,
    /// Per-worker diagnostics, in worker-name order.
    pub summaries: Vec<WorkerSummary>,
}

fn days_in_month(year: i32, month: u32) -> PlanResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(PlanError::InvalidMonth { year, month })?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(PlanError::InvalidMonth { year, month })?;
    Ok(next_first.pred_opt().map(|d| d.day()).unwrap_or(first.day()))
}

fn summarize(snapshot: &PlanningSnapshot, ledger: &HoursLedger) -> Vec<WorkerSummary> {
    let tolerance = hours_tolerance();
    snapshot
        .roster
        .iter()
        .map(|worker| {
            let hours_worked = ledger.hours_for(&worker.name);
            let status = if worker.max_hours > Decimal::ZERO
                && hours_worked > worker.max_hours + tolerance
            {
                if worker.overtime_allowed {
                    SummaryStatus::Overtime
                } else {
                    SummaryStatus::OverMax
                }
            } else if worker.contracted_hours > Decimal::ZERO
                && hours_worked < worker.contracted_hours - tolerance
            {
                SummaryStatus::UnderContract
            } else {
                SummaryStatus::Ok
            };
            WorkerSummary {
                worker: worker.name.clone(),
                hours_worked,
                contracted_hours: worker.contracted_hours,
                max_hours: worker.max_hours,
                status,
            }
        })
        .collect()
}

fn plan_month_inner(
    snapshot: &PlanningSnapshot,
    year: i32,
    month: u32,
    mut rng: Option<StdRng>,
) -> PlanResult<PlanOutcome> {
    snapshot.validate()?;
    let day_count = days_in_month(year, month)?;
    let holidays = resolve_holidays(&snapshot.fixed_holidays, year);

    info!(year, month, day_count, workers = snapshot.roster.len(), "planning month");

    let mut schedule = MonthSchedule::new(year, month);
    let mut ledger = HoursLedger::new();

    for day in 1..=day_count {
        // Constructed from a validated (year, month) and a day in range.
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(PlanError::InvalidMonth { year, month })?;

        if holidays.contains(&MonthDay::from_date(date)) {
            debug!(%date, "holiday, store closed");
            let mut day_schedule = DaySchedule::new();
            for worker in &snapshot.roster {
                let outcome = if worker.on_vacation(date) {
                    DayOutcome::Vacation
                } else {
                    DayOutcome::Holiday
                };
                day_schedule.record(&worker.name, outcome);
            }
            schedule.insert_day(day, day_schedule);
            continue;
        }

        let day_schedule = plan_day(snapshot, date, &schedule, &mut ledger, rng.as_mut());
        schedule.insert_day(day, day_schedule);
    }

    let summaries = summarize(snapshot, &ledger);
    info!(gaps = schedule.gap_count(), "month planned");

    Ok(PlanOutcome {
        schedule,
        ledger,
        summaries,
    })
}

/// Plans a calendar month deterministically.
///
/// Candidate ties are broken by the documented lexicographic rule, so
/// repeated calls with identical inputs produce identical schedules.
///
/// # Errors
///
/// Fails before any day is planned when the snapshot violates a static
/// invariant or (year, month) is not a valid calendar month. Coverage
/// gaps and availability exhaustion are recorded in the schedule, never
/// returned as errors.
pub fn plan_month(
    snapshot: &PlanningSnapshot,
    year: i32,
    month: u32,
) -> PlanResult<PlanOutcome> {
    plan_month_inner(snapshot, year, month, None)
}

/// Plans a calendar month with seed-dependent tie-breaking.
///
/// Pure in the seed: the same `(snapshot, year, month, seed)` always
/// yields the same schedule. Randomness is confined to the order of
/// equally ranked candidates.
pub fn plan_month_seeded(
    snapshot: &PlanningSnapshot,
    year: i32,
    month: u32,
    seed: u64,
) -> PlanResult<PlanOutcome> {
    plan_month_inner(snapshot, year, month, Some(StdRng::seed_from_u64(seed)))
}

/// Bounded search over seeds `0..attempts`, keeping the attempt with the
/// fewest coverage-gap days (first seed wins ties). Returns early on a
/// gap-free month. `attempts` is clamped to at least one.
pub fn plan_month_best_of(
    snapshot: &PlanningSnapshot,
    year: i32,
    month: u32,
    attempts: u64,
) -> PlanResult<PlanOutcome> {
    let mut best: Option<PlanOutcome> = None;

    for seed in 0..attempts.max(1) {
        let outcome = plan_month_seeded(snapshot, year, month, seed)?;
        let gaps = outcome.schedule.gap_count();
        debug!(seed, gaps, "seed attempt finished");
        if gaps == 0 {
            return Ok(outcome);
        }
        match &best {
            Some(current) if current.schedule.gap_count() <= gaps => {}
            _ => best = Some(outcome),
        }
    }

    // The loop always runs at least once.
    Ok(best.expect("at least one seed attempt"))
}
