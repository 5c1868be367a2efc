//! Sleep log entries and their validation

use crate::error::{Result, SleepVaultError};
use chrono::NaiveDate;
use std::ops::RangeInclusive;

/// Nights at or above this many hours count toward a streak
pub const GOOD_NIGHT_HOURS: f64 = 8.0;

/// Valid range for hours slept
pub const HOURS_RANGE: RangeInclusive<f64> = 0.0..=24.0;

/// Valid range for the energy score
pub const SCORE_RANGE: RangeInclusive<u8> = 1..=10;

/// Score used when the user does not give one
pub const DEFAULT_ENERGY_SCORE: u8 = 7;

/// One logged night of sleep.
///
/// Entries are immutable once created; the constructor is the only place
/// where range checks happen.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepEntry {
    date: NaiveDate,
    hours_slept: f64,
    energy_score: u8,
    notes: String,
}

impl SleepEntry {
    /// Create a validated entry
    pub fn new(
        date: NaiveDate,
        hours_slept: f64,
        energy_score: u8,
        notes: impl Into<String>,
    ) -> Result<Self> {
        if !hours_slept.is_finite() || !HOURS_RANGE.contains(&hours_slept) {
            return Err(SleepVaultError::InvalidEntry(format!(
                "hours slept must be between {} and {}, got {}",
                HOURS_RANGE.start(),
                HOURS_RANGE.end(),
                hours_slept
            )));
        }

        if !SCORE_RANGE.contains(&energy_score) {
            return Err(SleepVaultError::InvalidEntry(format!(
                "energy score must be between {} and {}, got {}",
                SCORE_RANGE.start(),
                SCORE_RANGE.end(),
                energy_score
            )));
        }

        Ok(SleepEntry {
            date,
            // -0.0 becomes 0.0
            hours_slept: hours_slept + 0.0,
            energy_score,
            notes: notes.into(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hours_slept(&self) -> f64 {
        self.hours_slept
    }

    pub fn energy_score(&self) -> u8 {
        self.energy_score
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Whether this night meets the good-sleep threshold
    pub fn is_good_night(&self) -> bool {
        self.hours_slept >= GOOD_NIGHT_HOURS
    }
}
