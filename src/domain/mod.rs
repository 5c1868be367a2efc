//! Domain layer - Business logic and domain models

pub mod date_ref;
pub mod entry;
pub mod streak;
pub mod theme;
pub mod weekly;

pub use date_ref::DateReference;
pub use entry::SleepEntry;
pub use streak::{evaluate_streak, Badge};
pub use theme::Theme;
pub use weekly::{WeeklySummary, WEEKLY_WINDOW};
