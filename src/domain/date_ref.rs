//! Date references for logged nights

use crate::error::{Result, SleepVaultError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A night given relative to today or as a calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Current/most recent occurrence of a weekday
    Weekday(Weekday),
    /// Previous occurrence of a weekday (strictly before today)
    LastWeekday(Weekday),
    /// Specific date
    SpecificDate(NaiveDate),
}

impl DateReference {
    /// Parse a date reference string.
    ///
    /// `last monday` may also be written `last-monday` so it fits in one
    /// session token.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(DateReference::Weekday(weekday));
        }

        match normalized.as_str() {
            "today" | "tonight" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            _ => {
                let last = normalized
                    .strip_prefix("last ")
                    .or_else(|| normalized.strip_prefix("last-"));
                if let Some(day) = last {
                    return parse_weekday(day.trim())
                        .map(DateReference::LastWeekday)
                        .ok_or_else(|| SleepVaultError::InvalidDate(input.to_string()));
                }

                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .map(DateReference::SpecificDate)
                    .map_err(|_| SleepVaultError::InvalidDate(input.to_string()))
            }
        }
    }

    /// Resolve this reference to an actual date
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::Weekday(target) => {
                today - Duration::days(days_back(today.weekday(), *target) as i64)
            }
            DateReference::LastWeekday(target) => {
                let days = match days_back(today.weekday(), *target) {
                    0 => 7,
                    days => days,
                };
                today - Duration::days(days as i64)
            }
            DateReference::SpecificDate(date) => *date,
        }
    }
}

/// Days from the most recent `target` up to `current`, 0 when they match
fn days_back(current: Weekday, target: Weekday) -> u32 {
    (current.num_days_from_monday() + 7 - target.num_days_from_monday()) % 7
}

fn parse_weekday(day: &str) -> Option<Weekday> {
    match day {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
