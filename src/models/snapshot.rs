//! Immutable planning input snapshot.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

use super::calendar::MonthDay;
use super::shift_window::ShiftWindow;
use super::store_hours::StoreHours;
use super::worker::Roster;

/// The immutable bundle of inputs captured before a planning run starts.
///
/// The engine only ever borrows a snapshot; it never mutates roster or
/// catalog data during a run. Runs for different months may share one
/// snapshot sequentially, but concurrent runs must each receive their own
/// copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningSnapshot {
    /// The workers eligible for assignment.
    pub roster: Roster,
    /// The catalog of assignable shift windows, in configuration order.
    pub catalog: Vec<ShiftWindow>,
    /// The store's daily operating window.
    pub store_hours: StoreHours,
    /// Fixed holidays that recur every year.
    pub fixed_holidays: Vec<MonthDay>,
}

impl PlanningSnapshot {
    /// Checks the static invariants that must hold before any day is
    /// planned.
    ///
    /// # Errors
    ///
    /// - [`PlanError::InvalidShiftWindow`] when a catalog window is empty,
    ///   inverted, or extends outside store hours.
    /// - [`PlanError::InvalidWorker`] when a worker has a weekly rest day
    ///   outside 0..=6 or a negative hour limit.
    pub fn validate(&self) -> PlanResult<()> {
        for window in &self.catalog {
            let complaint = if window.end <= window.start {
                Some("end must be after start")
            } else if window.start < self.store_hours.open {
                Some("starts before store opening")
            } else if window.end > self.store_hours.close {
                Some("ends after store closing")
            } else {
                None
            };
            if let Some(message) = complaint {
                return Err(PlanError::InvalidShiftWindow {
                    start: window.start.format("%H:%M").to_string(),
                    end: window.end.format("%H:%M").to_string(),
                    message: message.to_string(),
                });
            }
        }

        for worker in &self.roster {
            if let Some(day) = worker.weekly_rest_days.iter().find(|d| **d > 6) {
                return Err(PlanError::InvalidWorker {
                    name: worker.name.clone(),
                    message: format!("weekly rest day {day} is out of range"),
                });
            }
            if worker.max_hours.is_sign_negative() || worker.contracted_hours.is_sign_negative() {
                return Err(PlanError::InvalidWorker {
                    name: worker.name.clone(),
                    message: "hour limits must not be negative".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Worker;
    use rust_decimal::Decimal;

    fn base_snapshot() -> PlanningSnapshot {
        PlanningSnapshot {
            roster: [Worker {
                name: "Anna".to_string(),
                contracted_hours: Decimal::from(40),
                max_hours: Decimal::from(48),
                overtime_allowed: false,
                weekly_rest_days: Default::default(),
                vacation_days: Default::default(),
            }]
            .into_iter()
            .collect(),
            catalog: vec![
                ShiftWindow::parse("08:00", "14:00").unwrap(),
                ShiftWindow::parse("14:00", "21:00").unwrap(),
            ],
            store_hours: StoreHours::parse("08:00", "21:00").unwrap(),
            fixed_holidays: vec![],
        }
    }

    #[test]
    fn test_valid_snapshot_passes() {
        assert!(base_snapshot().validate().is_ok());
    }

    #[test]
    fn test_window_before_opening_rejected() {
        let mut snapshot = base_snapshot();
        snapshot.catalog.push(ShiftWindow::parse("07:00", "14:00").unwrap());
        let error = snapshot.validate().unwrap_err();
        assert!(matches!(error, PlanError::InvalidShiftWindow { .. }));
        assert!(error.to_string().contains("starts before store opening"));
    }

    #[test]
    fn test_window_after_closing_rejected() {
        let mut snapshot = base_snapshot();
        snapshot.catalog.push(ShiftWindow::parse("14:00", "22:00").unwrap());
        let error = snapshot.validate().unwrap_err();
        assert!(error.to_string().contains("ends after store closing"));
    }

    #[test]
    fn test_window_at_exact_bounds_accepted() {
        let mut snapshot = base_snapshot();
        snapshot.catalog = vec![ShiftWindow::parse("08:00", "21:00").unwrap()];
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_rest_day_out_of_range_rejected() {
        let mut snapshot = base_snapshot();
        let mut worker = snapshot.roster.get("Anna").unwrap().clone();
        worker.weekly_rest_days.insert(7);
        snapshot.roster.insert(worker);
        let error = snapshot.validate().unwrap_err();
        assert!(matches!(error, PlanError::InvalidWorker { .. }));
    }

    #[test]
    fn test_negative_hours_rejected() {
        let mut snapshot = base_snapshot();
        let mut worker = snapshot.roster.get("Anna").unwrap().clone();
        worker.max_hours = Decimal::from(-1);
        snapshot.roster.insert(worker);
        assert!(snapshot.validate().is_err());
    }
}
