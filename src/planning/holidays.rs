//! Holiday resolution.
//!
//! Resolves the set of non-working dates for a year: a configured list of
//! fixed holidays plus Easter Sunday and Easter Monday, whose dates are
//! computed per year.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::MonthDay;

/// The default fixed-holiday list: the Italian national holidays observed
/// by the original roster (New Year, Epiphany, Liberation Day, Labour Day,
/// Republic Day, Assumption, All Saints, Immaculate Conception, Christmas,
/// St. Stephen). Easter Sunday and Easter Monday are computed, not listed.
pub fn default_fixed_holidays() -> Vec<MonthDay> {
    [
        (1, 1),
        (6, 1),
        (25, 4),
        (1, 5),
        (2, 6),
        (15, 8),
        (1, 11),
        (8, 12),
        (25, 12),
        (26, 12),
    ]
    .into_iter()
    .map(|(day, month)| MonthDay::new(day, month))
    .collect()
}

/// Computes the date of Easter Sunday for a year in the Gregorian
/// calendar, using the Meeus/Jones/Butcher algorithm. Integer arithmetic
/// only; no table lookup.
///
/// # Examples
///
/// ```
/// use shift_planner::planning::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2024), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    // The algorithm only ever yields a valid March or April date.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .unwrap_or_else(|| unreachable!("computus produced invalid date for year {year}"))
}

/// Resolves the full holiday set for a year: the fixed list united with
/// Easter Sunday and Easter Monday. Pure and deterministic.
pub fn resolve_holidays(fixed: &[MonthDay], year: i32) -> BTreeSet<MonthDay> {
    let easter = easter_sunday(year);
    let easter_monday = easter.succ_opt().unwrap_or(easter);

    let mut holidays: BTreeSet<MonthDay> = fixed.iter().copied().collect();
    holidays.insert(MonthDay::from_date(easter));
    holidays.insert(MonthDay::from_date(easter_monday));
    holidays
}
