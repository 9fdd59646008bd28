//! Candidate validation and scoring.
//!
//! For every (worker, shift window) pair on a day, this module decides
//! whether the assignment would violate the worker's hard hour ceiling,
//! and scores the valid pairs by desirability. The allocator consumes the
//! ranked list front to back.

use chrono::NaiveTime;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

use crate::models::{MonthSchedule, ShiftWindow, Worker, minutes_from_midnight};

use super::ledger::HoursLedger;

/// Every valid candidate starts from this score.
pub const BASE_SCORE: i32 = 100;

/// Bonus for staying within the worker's contracted hours.
pub const CONTRACT_BONUS: i32 = 20;

/// Penalty per assignment to the same window within the trailing repeat
/// window.
pub const REPEAT_PENALTY: i32 = 30;

/// Bonus for keeping the worker's morning/afternoon distribution balanced.
pub const BALANCE_BONUS: i32 = 10;

/// How many trailing calendar days the repeat penalty looks at.
pub const REPEAT_WINDOW_DAYS: u32 = 3;

/// Shifts starting before this minute of the day count as morning shifts.
const AFTERNOON_BOUNDARY_MINUTE: u32 = 13 * 60;

/// Tolerance applied to hour-limit comparisons.
pub fn hours_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

/// A scored, valid (worker, window) pair for one day.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// The worker to assign.
    pub worker: &'a Worker,
    /// The window to assign them to.
    pub window: ShiftWindow,
    /// Desirability score; higher is better.
    pub score: i32,
}

/// Checks the hard hour-ceiling constraint.
///
/// A worker without overtime authorization may not be pushed past
/// `max_hours` (with a 0.01-hour tolerance) by this assignment. Workers
/// with overtime authorization are never rejected here.
pub fn within_hour_ceiling(worker: &Worker, window: &ShiftWindow, hours_so_far: Decimal) -> bool {
    if worker.overtime_allowed {
        return true;
    }
    hours_so_far + window.hours() <= worker.max_hours + hours_tolerance()
}

fn is_morning_start(start: NaiveTime) -> bool {
    minutes_from_midnight(start) < AFTERNOON_BOUNDARY_MINUTE
}

/// Counts assignments to the same window for this worker within the
/// trailing repeat window of the partial schedule.
fn recent_repeats(schedule: &MonthSchedule, worker: &Worker, window: &ShiftWindow, day: u32) -> i32 {
    let from = day.saturating_sub(REPEAT_WINDOW_DAYS).max(1);
    (from..day)
        .filter_map(|d| schedule.day(d))
        .filter_map(|sched| sched.shift(&worker.name))
        .filter(|(start, end)| *start == window.start && *end == window.end)
        .count() as i32
}

/// Counts the worker's morning and afternoon shifts recorded so far this
/// month.
fn shift_type_counts(schedule: &MonthSchedule, worker: &Worker) -> (i32, i32) {
    let mut morning = 0;
    let mut afternoon = 0;
    for (_, sched) in schedule.days() {
        if let Some((start, _)) = sched.shift(&worker.name) {
            if is_morning_start(start) {
                morning += 1;
            } else {
                afternoon += 1;
            }
        }
    }
    (morning, afternoon)
}

/// Scores a valid candidate.
///
/// Starts from [`BASE_SCORE`] and applies:
/// - `+20` when the assignment keeps the worker within contracted hours;
/// - `-30` per assignment to the same window within the trailing 3
///   calendar days;
/// - `+10` when the shift's type (morning starts before 13:00) rebalances
///   the worker's morning/afternoon distribution: a morning shift earns
///   the bonus when morning count <= afternoon count, an afternoon shift
///   when afternoon count < morning count.
///
/// Only called for candidates that passed [`within_hour_ceiling`].
pub fn score_candidate(
    worker: &Worker,
    window: &ShiftWindow,
    day: u32,
    hours_so_far: Decimal,
    schedule: &MonthSchedule,
) -> i32 {
    let mut score = BASE_SCORE;

    if hours_so_far + window.hours() <= worker.contracted_hours {
        score += CONTRACT_BONUS;
    }

    score -= REPEAT_PENALTY * recent_repeats(schedule, worker, window, day);

    let (morning, afternoon) = shift_type_counts(schedule, worker);
    if is_morning_start(window.start) {
        if morning <= afternoon {
            score += BALANCE_BONUS;
        }
    } else if afternoon < morning {
        score += BALANCE_BONUS;
    }

    score
}

/// Builds the scored candidate list for one day: every available worker
/// crossed with every catalog window, minus the pairs that would break the
/// hour ceiling.
pub fn generate_candidates<'a>(
    available: &[&'a Worker],
    catalog: &[ShiftWindow],
    day: u32,
    ledger: &HoursLedger,
    schedule: &MonthSchedule,
) -> Vec<Candidate<'a>> {
    let mut candidates = Vec::with_capacity(available.len() * catalog.len());
    for worker in available {
        let hours_so_far = ledger.hours_for(&worker.name);
        for window in catalog {
            if within_hour_ceiling(worker, window, hours_so_far) {
                candidates.push(Candidate {
                    worker,
                    window: *window,
                    score: score_candidate(worker, window, day, hours_so_far, schedule),
                });
            }
        }
    }
    candidates
}

/// Orders candidates best-first: descending score, then descending
/// duration (longer windows close gaps faster).
///
/// Without an RNG, ties beyond `(score, duration)` break deterministically
/// by ascending worker name, then ascending window start. With a seeded
/// RNG, the list is shuffled before the stable sort, so equal
/// `(score, duration)` groups keep a seed-dependent order instead.
pub fn rank_candidates(candidates: &mut [Candidate<'_>], rng: Option<&mut StdRng>) {
    match rng {
        Some(rng) => {
            candidates.shuffle(rng);
            candidates.sort_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then(b.window.duration_minutes().cmp(&a.window.duration_minutes()))
            });
        }
        None => {
            candidates.sort_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then(b.window.duration_minutes().cmp(&a.window.duration_minutes()))
                    .then(a.worker.name.cmp(&b.worker.name))
                    .then(a.window.start.cmp(&b.window.start))
            });
        }
    }
}
