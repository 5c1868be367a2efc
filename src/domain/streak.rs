//! Good-sleep streaks and the badges they unlock

use crate::domain::SleepEntry;
use std::fmt;

/// Count consecutive good nights from the most recent date backwards.
///
/// Entries are ordered by date descending. Entries that share a date are
/// ordered with the later submission first. The scan stops at the first
/// night below the threshold.
pub fn evaluate_streak(entries: &[SleepEntry]) -> u32 {
    let mut newest_first: Vec<&SleepEntry> = entries.iter().rev().collect();
    // Stable sort keeps later submissions ahead of earlier ones on equal dates
    newest_first.sort_by(|a, b| b.date().cmp(&a.date()));

    let streak = newest_first
        .iter()
        .take_while(|entry| entry.is_good_night())
        .count() as u32;

    tracing::debug!(entries = entries.len(), streak, "evaluated streak");
    streak
}

/// Milestone tiers unlocked by a streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Badge {
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl Badge {
    /// All tiers, highest first
    pub const TIERS: [Badge; 4] = [Badge::Diamond, Badge::Gold, Badge::Silver, Badge::Bronze];

    /// Highest badge earned by a streak, if any
    pub fn for_streak(streak: u32) -> Option<Badge> {
        Self::TIERS
            .into_iter()
            .find(|badge| streak >= badge.threshold())
    }

    /// Minimum streak that unlocks this badge
    pub fn threshold(&self) -> u32 {
        match self {
            Badge::Bronze => 3,
            Badge::Silver => 7,
            Badge::Gold => 14,
            Badge::Diamond => 30,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Badge::Bronze => "🥉",
            Badge::Silver => "🥈",
            Badge::Gold => "🥇",
            Badge::Diamond => "🏆",
        }
    }

    /// Message shown when the badge is held
    pub fn message(&self) -> &'static str {
        match self {
            Badge::Bronze => "Bronze Badge: 3 days in a row!",
            Badge::Silver => "Silver Badge: 7+ days!",
            Badge::Gold => "Gold Badge: 14+ days!",
            Badge::Diamond => "Diamond Badge: 30+ days of greatness!",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Badge::Bronze => "Bronze",
            Badge::Silver => "Silver",
            Badge::Gold => "Gold",
            Badge::Diamond => "Diamond",
        };
        f.write_str(name)
    }
}
