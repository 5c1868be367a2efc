//! Weekly aggregate over the most recently logged nights

use crate::domain::entry::GOOD_NIGHT_HOURS;
use crate::domain::SleepEntry;

/// Number of most recently stored entries that make up the weekly window
pub const WEEKLY_WINDOW: usize = 7;

/// Mean hours and best energy over the weekly window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklySummary {
    pub nights: usize,
    pub avg_hours: f64,
    pub max_energy: u8,
}

impl WeeklySummary {
    /// Aggregate a window of entries. Returns None for an empty window.
    pub fn from_window(window: &[SleepEntry]) -> Option<Self> {
        let max_energy = window.iter().map(SleepEntry::energy_score).max()?;
        let total: f64 = window.iter().map(SleepEntry::hours_slept).sum();

        Some(WeeklySummary {
            nights: window.len(),
            avg_hours: total / window.len() as f64,
            max_energy,
        })
    }

    /// Whether the average meets the good-sleep threshold
    pub fn meets_target(&self) -> bool {
        self.avg_hours >= GOOD_NIGHT_HOURS
    }
}
