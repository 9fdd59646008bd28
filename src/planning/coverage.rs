//! Minute-resolution coverage tracking.
//!
//! A [`CoverageTrack`] records which minutes of one day's operating window
//! are staffed. It is created fresh for every planned day and discarded
//! when the day's allocation finishes.

use chrono::NaiveTime;

use crate::models::{ShiftWindow, StoreHours};

/// Boolean track over the operating window, one entry per minute.
#[derive(Debug, Clone)]
pub struct CoverageTrack {
    open_minute: u32,
    covered: Vec<bool>,
}

impl CoverageTrack {
    /// Creates an all-uncovered track spanning the store's operating
    /// window.
    pub fn new(hours: StoreHours) -> Self {
        Self {
            open_minute: hours.open_minute(),
            covered: vec![false; hours.span_minutes() as usize],
        }
    }

    /// Marks the window's minutes as covered. Bounds outside the operating
    /// window are clipped; a window entirely outside it marks nothing.
    pub fn mark_covered(&mut self, window: &ShiftWindow) {
        self.mark_range(window.start_minute(), window.end_minute());
    }

    /// Marks the half-open minute range `[start, end)` (minutes from
    /// midnight) as covered, clipping to the operating window.
    pub fn mark_range(&mut self, start: u32, end: u32) {
        let len = self.covered.len() as u32;
        let from = start.saturating_sub(self.open_minute).min(len);
        let to = end.saturating_sub(self.open_minute).clamp(from, len);
        for slot in &mut self.covered[from as usize..to as usize] {
            *slot = true;
        }
    }

    /// Returns the earliest uncovered minute (from midnight), or `None`
    /// when the whole window is covered.
    pub fn first_uncovered_minute(&self) -> Option<u32> {
        self.covered
            .iter()
            .position(|covered| !covered)
            .map(|idx| self.open_minute + idx as u32)
    }

    /// Returns the earliest uncovered minute as a time-of-day.
    pub fn first_uncovered_time(&self) -> Option<NaiveTime> {
        self.first_uncovered_minute().and_then(|minute| {
            NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)
        })
    }

    /// The number of covered minutes.
    pub fn covered_minutes(&self) -> usize {
        self.covered.iter().filter(|c| **c).count()
    }

    /// Returns true when every minute of the operating window is covered.
    pub fn is_fully_covered(&self) -> bool {
        self.first_uncovered_minute().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours() -> StoreHours {
        StoreHours::parse("08:00", "21:00").unwrap()
    }

    fn window(start: &str, end: &str) -> ShiftWindow {
        ShiftWindow::parse(start, end).unwrap()
    }

    #[test]
    fn test_new_track_is_uncovered_from_opening() {
        let track = CoverageTrack::new(hours());
        assert_eq!(track.first_uncovered_minute(), Some(8 * 60));
        assert_eq!(track.covered_minutes(), 0);
        assert!(!track.is_fully_covered());
    }

    #[test]
    fn test_mark_covered_advances_first_gap() {
        let mut track = CoverageTrack::new(hours());
        track.mark_covered(&window("08:00", "14:00"));
        assert_eq!(track.first_uncovered_minute(), Some(14 * 60));
        assert_eq!(track.covered_minutes(), 360);
    }

    #[test]
    fn test_full_coverage_from_two_windows() {
        let mut track = CoverageTrack::new(hours());
        track.mark_covered(&window("08:00", "14:00"));
        track.mark_covered(&window("14:00", "21:00"));
        assert!(track.is_fully_covered());
        assert_eq!(track.first_uncovered_minute(), None);
        assert_eq!(track.covered_minutes(), 780);
    }

    #[test]
    fn test_overlapping_windows_count_once() {
        let mut track = CoverageTrack::new(hours());
        track.mark_covered(&window("08:00", "15:00"));
        track.mark_covered(&window("13:00", "21:00"));
        assert!(track.is_fully_covered());
        assert_eq!(track.covered_minutes(), 780);
    }

    #[test]
    fn test_out_of_range_bounds_are_clipped() {
        let mut track = CoverageTrack::new(hours());
        // Range starting before opening and ending after closing
        track.mark_range(6 * 60, 23 * 60);
        assert!(track.is_fully_covered());
        assert_eq!(track.covered_minutes(), 780);
    }

    #[test]
    fn test_range_entirely_outside_marks_nothing() {
        let mut track = CoverageTrack::new(hours());
        track.mark_range(21 * 60, 23 * 60);
        track.mark_range(0, 8 * 60);
        assert_eq!(track.covered_minutes(), 0);
    }

    #[test]
    fn test_first_uncovered_time() {
        let mut track = CoverageTrack::new(hours());
        track.mark_covered(&window("08:00", "14:30"));
        assert_eq!(
            track.first_uncovered_time(),
            NaiveTime::from_hms_opt(14, 30, 0)
        );
    }

    #[test]
    fn test_gap_in_the_middle_found_first() {
        let mut track = CoverageTrack::new(hours());
        track.mark_covered(&window("08:00", "12:00"));
        track.mark_covered(&window("15:00", "21:00"));
        assert_eq!(track.first_uncovered_minute(), Some(12 * 60));
    }
}
