//! In-memory entry store

use crate::domain::SleepEntry;
use crate::error::Result;
use crate::infrastructure::csv_codec;

/// Ordered collection of logged nights
pub trait EntryStore {
    /// Append an entry at the end; duplicates are kept
    fn append(&mut self, entry: SleepEntry);

    /// All entries in insertion order
    fn all(&self) -> &[SleepEntry];

    /// Last `n` entries by insertion order
    fn tail(&self, n: usize) -> &[SleepEntry] {
        let all = self.all();
        &all[all.len().saturating_sub(n)..]
    }

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    /// Serialize every entry as CSV with a header line
    fn export_csv(&self) -> Result<Vec<u8>> {
        csv_codec::write_entries(self.all())
    }
}

/// Entries held for the lifetime of one session and never written to disk
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    entries: Vec<SleepEntry>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    /// Rebuild a store from previously exported CSV bytes
    pub fn from_csv(bytes: &[u8]) -> Result<Self> {
        Ok(SessionStore {
            entries: csv_codec::read_entries(bytes)?,
        })
    }
}

impl EntryStore for SessionStore {
    fn append(&mut self, entry: SleepEntry) {
        tracing::info!(
            date = %entry.date(),
            hours = entry.hours_slept(),
            score = entry.energy_score(),
            "entry appended"
        );
        self.entries.push(entry);
    }

    fn all(&self) -> &[SleepEntry] {
        &self.entries
    }
}
