//! Configuration loading functionality.
//!
//! Loads a planning configuration from a YAML document and converts it
//! into a validated [`PlanningSnapshot`]. Every malformed time string,
//! inverted window, or out-of-range worker field is rejected here, before
//! a run starts; the engine itself never sees invalid configuration.

use std::fs;
use std::path::Path;

use crate::error::{PlanError, PlanResult};
use crate::models::{MonthDay, PlanningSnapshot, Roster, ShiftWindow, StoreHours, Worker};
use crate::planning::default_fixed_holidays;

use super::types::PlanConfig;

impl PlanConfig {
    /// Loads a planning configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::ConfigNotFound`] when the file does not exist
    /// and [`PlanError::ConfigParse`] when it is not valid YAML for the
    /// expected document shape.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_planner::config::PlanConfig;
    ///
    /// let config = PlanConfig::load("./plan.yaml")?;
    /// let snapshot = config.into_snapshot()?;
    /// # Ok::<(), shift_planner::error::PlanError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PlanResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                PlanError::ConfigNotFound {
                    path: path.display().to_string(),
                }
            } else {
                PlanError::ConfigParse {
                    path: path.display().to_string(),
                    message: err.to_string(),
                }
            }
        })?;
        Self::from_yaml(&contents, &path.display().to_string())
    }

    /// Parses a planning configuration from a YAML string.
    ///
    /// `source` names the document in error messages.
    pub fn from_yaml(contents: &str, source: &str) -> PlanResult<Self> {
        serde_yaml::from_str(contents).map_err(|err| PlanError::ConfigParse {
            path: source.to_string(),
            message: err.to_string(),
        })
    }

    /// Converts the raw configuration into a validated snapshot.
    ///
    /// # Errors
    ///
    /// Any invalid time string, shift window, store-hours pair, holiday
    /// entry, or worker field fails here with the matching [`PlanError`]
    /// variant.
    pub fn into_snapshot(self) -> PlanResult<PlanningSnapshot> {
        let store_hours = StoreHours::parse(&self.store_hours.open, &self.store_hours.close)?;

        let catalog = self
            .shifts
            .iter()
            .map(|shift| ShiftWindow::parse(&shift.start, &shift.end))
            .collect::<PlanResult<Vec<_>>>()?;

        let fixed_holidays = match self.fixed_holidays {
            Some(entries) => entries
                .iter()
                .map(|entry| entry.parse::<MonthDay>())
                .collect::<PlanResult<Vec<_>>>()?,
            None => default_fixed_holidays(),
        };

        let roster: Roster = self
            .workers
            .into_iter()
            .map(|(name, worker)| Worker {
                name,
                contracted_hours: worker.contracted_hours,
                max_hours: worker.max_hours,
                overtime_allowed: worker.overtime_allowed,
                weekly_rest_days: worker.weekly_rest_days,
                vacation_days: worker.vacation_days,
            })
            .collect();

        let snapshot = PlanningSnapshot {
            roster,
            catalog,
            store_hours,
            fixed_holidays,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    const VALID_YAML: &str = r#"
store_hours:
  open: "08:00"
  close: "21:00"
shifts:
  - start: "08:00"
    end: "14:00"
  - start: "14:00"
    end: "21:00"
fixed_holidays: ["01-01", "25-12"]
workers:
  Anna:
    contracted_hours: "160"
    max_hours: "184"
    weekly_rest_days: [6]
  Bruno:
    contracted_hours: "160"
    max_hours: "184"
    overtime_allowed: true
    vacation_days: ["2024-06-10"]
"#;

    #[test]
    fn test_valid_document_becomes_snapshot() {
        let config = PlanConfig::from_yaml(VALID_YAML, "test").unwrap();
        let snapshot = config.into_snapshot().unwrap();

        assert_eq!(snapshot.catalog.len(), 2);
        assert_eq!(snapshot.store_hours.span_minutes(), 780);
        assert_eq!(snapshot.fixed_holidays.len(), 2);
        assert_eq!(snapshot.roster.len(), 2);

        let anna = snapshot.roster.get("Anna").unwrap();
        assert_eq!(anna.contracted_hours, Decimal::from(160));
        assert!(!anna.overtime_allowed);
        assert!(anna.weekly_rest_days.contains(&6));

        let bruno = snapshot.roster.get("Bruno").unwrap();
        assert!(bruno.overtime_allowed);
        assert!(
            bruno
                .vacation_days
                .contains(&NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
        );
    }

    #[test]
    fn test_missing_fixed_holidays_uses_default_list() {
        let yaml = r#"
store_hours:
  open: "08:00"
  close: "21:00"
shifts:
  - start: "08:00"
    end: "21:00"
workers:
  Anna:
    contracted_hours: "160"
    max_hours: "184"
"#;
        let snapshot = PlanConfig::from_yaml(yaml, "test")
            .unwrap()
            .into_snapshot()
            .unwrap();
        assert_eq!(snapshot.fixed_holidays, default_fixed_holidays());
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let error = PlanConfig::from_yaml("store_hours: [not a map", "plan.yaml").unwrap_err();
        assert!(matches!(error, PlanError::ConfigParse { .. }));
        assert!(error.to_string().contains("plan.yaml"));
    }

    #[test]
    fn test_bad_time_string_fails_conversion() {
        let yaml = VALID_YAML.replace("\"08:00\"", "\"8 o'clock\"");
        let error = PlanConfig::from_yaml(&yaml, "test")
            .unwrap()
            .into_snapshot()
            .unwrap_err();
        assert!(matches!(error, PlanError::InvalidTime { .. }));
    }

    #[test]
    fn test_inverted_window_fails_conversion() {
        let yaml = r#"
store_hours:
  open: "08:00"
  close: "21:00"
shifts:
  - start: "14:00"
    end: "08:00"
workers:
  Anna:
    contracted_hours: "160"
    max_hours: "184"
"#;
        let error = PlanConfig::from_yaml(yaml, "test")
            .unwrap()
            .into_snapshot()
            .unwrap_err();
        assert!(matches!(error, PlanError::InvalidShiftWindow { .. }));
    }

    #[test]
    fn test_bad_holiday_entry_fails_conversion() {
        let yaml = VALID_YAML.replace("\"01-01\"", "\"Jan 1st\"");
        let error = PlanConfig::from_yaml(&yaml, "test")
            .unwrap()
            .into_snapshot()
            .unwrap_err();
        assert!(matches!(error, PlanError::InvalidHoliday { .. }));
    }

    #[test]
    fn test_window_outside_store_hours_fails_validation() {
        let yaml = r#"
store_hours:
  open: "09:00"
  close: "21:00"
shifts:
  - start: "08:00"
    end: "14:00"
workers:
  Anna:
    contracted_hours: "160"
    max_hours: "184"
"#;
        let error = PlanConfig::from_yaml(yaml, "test")
            .unwrap()
            .into_snapshot()
            .unwrap_err();
        assert!(matches!(error, PlanError::InvalidShiftWindow { .. }));
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let error = PlanConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(error, PlanError::ConfigNotFound { .. }));
    }
}
