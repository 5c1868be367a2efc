//! Dashboard view model

use crate::domain::{evaluate_streak, Badge, SleepEntry, WeeklySummary, WEEKLY_WINDOW};
use crate::infrastructure::EntryStore;

/// Everything the dashboard shows, computed from one snapshot of the store
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Entries in the weekly window, oldest first
    pub recent: Vec<SleepEntry>,
    /// Position of `recent[0]` in the whole log
    pub first_index: usize,
    pub total: usize,
    pub streak: u32,
    pub badge: Option<Badge>,
    pub weekly: Option<WeeklySummary>,
}

impl Dashboard {
    pub fn build<S: EntryStore + ?Sized>(store: &S) -> Self {
        let recent = store.tail(WEEKLY_WINDOW);
        let streak = evaluate_streak(store.all());

        Dashboard {
            recent: recent.to_vec(),
            first_index: store.len() - recent.len(),
            total: store.len(),
            streak,
            badge: Badge::for_streak(streak),
            weekly: WeeklySummary::from_window(recent),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
