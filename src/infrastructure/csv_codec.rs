//! CSV encoding of the sleep log
//!
//! Fields are quoted only when they contain a comma, a double quote or a
//! line break; embedded quotes are doubled (RFC 4180).

use crate::domain::SleepEntry;
use crate::error::{Result, SleepVaultError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Header line of every export
pub const HEADER: [&str; 4] = ["Date", "Hours Slept", "Energy Score", "Notes"];

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Hours Slept")]
    hours_slept: f64,
    #[serde(rename = "Energy Score")]
    energy_score: u8,
    #[serde(rename = "Notes", default)]
    notes: String,
}

impl From<&SleepEntry> for CsvRow {
    fn from(entry: &SleepEntry) -> Self {
        CsvRow {
            date: entry.date(),
            hours_slept: entry.hours_slept(),
            energy_score: entry.energy_score(),
            notes: entry.notes().to_string(),
        }
    }
}

/// Encode entries in order, header first. An empty slice yields the header only.
pub fn write_entries(entries: &[SleepEntry]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for entry in entries {
        writer.serialize(CsvRow::from(entry))?;
    }

    writer
        .into_inner()
        .map_err(|e| SleepVaultError::Io(e.into_error()))
}

/// Decode an export back into validated entries.
///
/// The first row that fails to parse or violates an entry range aborts the
/// import with its line number.
pub fn read_entries(bytes: &[u8]) -> Result<Vec<SleepEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    if !headers.iter().eq(HEADER.iter().copied()) {
        return Err(SleepVaultError::Import {
            line: 1,
            reason: format!(
                "expected header '{}', found '{}'",
                HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        });
    }

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let row: CsvRow = record
            .deserialize(Some(&headers))
            .map_err(|e| SleepVaultError::Import {
                line,
                reason: e.to_string(),
            })?;

        let entry = SleepEntry::new(row.date, row.hours_slept, row.energy_score, row.notes)
            .map_err(|e| SleepVaultError::Import {
                line,
                reason: e.to_string(),
            })?;
        entries.push(entry);
    }

    Ok(entries)
}
