//! Log a night of sleep

use crate::domain::entry::DEFAULT_ENERGY_SCORE;
use crate::domain::{DateReference, SleepEntry};
use crate::error::Result;
use crate::infrastructure::EntryStore;
use chrono::NaiveDate;

/// A submitted entry form before validation
#[derive(Debug, Clone, PartialEq)]
pub struct SleepForm {
    pub hours: f64,
    /// Defaults to 7
    pub score: Option<u8>,
    /// Defaults to today
    pub date: Option<DateReference>,
    pub notes: String,
}

impl SleepForm {
    pub fn new(hours: f64) -> Self {
        SleepForm {
            hours,
            score: None,
            date: None,
            notes: String::new(),
        }
    }
}

/// Validate the form and append it to the store.
///
/// Nothing is appended when validation fails.
pub fn log_sleep<S: EntryStore>(store: &mut S, form: SleepForm, today: NaiveDate) -> Result<SleepEntry> {
    let date = form
        .date
        .map(|reference| reference.resolve(today))
        .unwrap_or(today);
    let score = form.score.unwrap_or(DEFAULT_ENERGY_SCORE);

    let entry = SleepEntry::new(date, form.hours, score, form.notes)?;
    store.append(entry.clone());
    Ok(entry)
}
