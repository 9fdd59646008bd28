//! Greedy daily allocation.
//!
//! One call to [`plan_day`] fills one day's coverage: compute the
//! available workers, score every (worker, window) pair that survives
//! validation, then repeatedly close the earliest uncovered minute with
//! the best remaining candidate. A worker takes at most one shift per
//! day. Failure to reach full coverage is recorded in the day schedule,
//! never raised.

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::models::{DayOutcome, DaySchedule, MonthSchedule, PlanningSnapshot};

use super::availability::{Unavailability, available_workers};
use super::candidate::{Candidate, generate_candidates, hours_tolerance, rank_candidates};
use super::coverage::CoverageTrack;
use super::ledger::HoursLedger;

/// Plans one non-holiday day.
///
/// `schedule` is the partial month planned so far (used by the scorer for
/// repeat and balance heuristics); `ledger` is the month-scoped running
/// hours total, credited here for every committed assignment. When `rng`
/// is supplied, candidate ties are broken by a seeded shuffle instead of
/// the deterministic lexicographic rule.
pub fn plan_day(
    snapshot: &PlanningSnapshot,
    date: NaiveDate,
    schedule: &MonthSchedule,
    ledger: &mut HoursLedger,
    mut rng: Option<&mut StdRng>,
) -> DaySchedule {
    let availability = available_workers(&snapshot.roster, date);

    let mut day_schedule = DaySchedule::new();
    for (worker, reason) in &availability.excluded {
        let outcome = match reason {
            Unavailability::Vacation => DayOutcome::Vacation,
            Unavailability::Rest => DayOutcome::Rest,
        };
        day_schedule.record(&worker.name, outcome);
    }

    if availability.available.is_empty() {
        warn!(%date, "no workers available, leaving operating window unstaffed");
        return day_schedule;
    }

    let day = date.day();
    let mut candidates = generate_candidates(
        &availability.available,
        &snapshot.catalog,
        day,
        ledger,
        schedule,
    );
    rank_candidates(&mut candidates, rng.as_deref_mut());
    debug!(
        %date,
        available = availability.available.len(),
        candidates = candidates.len(),
        "allocating day"
    );

    let mut track = CoverageTrack::new(snapshot.store_hours);
    while let Some(minute) = track.first_uncovered_minute() {
        // Committed workers are removed from the list, so every remaining
        // candidate's worker is still unassigned today.
        let position = candidates
            .iter()
            .position(|candidate| candidate.window.covers_minute(minute));

        let Some(position) = position else {
            let first_uncovered = track
                .first_uncovered_time()
                .unwrap_or(snapshot.store_hours.open);
            warn!(%date, %first_uncovered, "coverage gap, no valid candidate left");
            day_schedule.set_first_uncovered(first_uncovered);
            for worker in &availability.available {
                if day_schedule.outcome(&worker.name).is_none() {
                    day_schedule.record(&worker.name, DayOutcome::CoverageError { first_uncovered });
                }
            }
            break;
        };

        let Candidate { worker, window, .. } = candidates[position].clone();
        day_schedule.record(
            &worker.name,
            DayOutcome::Shift {
                start: window.start,
                end: window.end,
            },
        );
        track.mark_covered(&window);
        ledger.credit(&worker.name, window.hours());
        debug_assert!(
            worker.overtime_allowed
                || ledger.hours_for(&worker.name) <= worker.max_hours + hours_tolerance(),
            "hour ceiling violated post-commit for {}",
            worker.name
        );

        let assigned = worker.name.clone();
        candidates.retain(|candidate| candidate.worker.name != assigned);
    }

    day_schedule
}
