//! Trailing date windows for filtering transactions

use chrono::{Duration, NaiveDateTime};
use summit_config::DateWindow;

use super::models::ClassifiedTransaction;

/// A date window anchored at a fixed "now"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeContext {
    pub window: DateWindow,
    pub now: NaiveDateTime,
}

impl TimeContext {
    pub fn new(window: DateWindow, now: NaiveDateTime) -> Self {
        Self { window, now }
    }

    /// Earliest date kept, `None` when the window is unbounded or reaches
    /// past the earliest representable date
    pub fn cutoff(&self) -> Option<NaiveDateTime> {
        self.window
            .days()
            .and_then(|days| self.now.checked_sub_signed(Duration::days(days)))
    }

    /// Inclusive lower bound, no upper bound: future-dated entries stay
    pub fn contains(&self, date: &NaiveDateTime) -> bool {
        match self.cutoff() {
            Some(cutoff) => *date >= cutoff,
            None => true,
        }
    }

    /// Get a human-readable description of the window
    pub fn description(&self) -> String {
        match self.window.days() {
            Some(days) => format!("Last {} days", days),
            None => "All time".to_string(),
        }
    }
}

/// Time filtering trait
pub trait TimeFilter {
    fn filter_by_time(&self, context: &TimeContext) -> bool;
}

impl TimeFilter for ClassifiedTransaction {
    fn filter_by_time(&self, context: &TimeContext) -> bool {
        context.contains(&self.date)
    }
}
