//! Dashboard for a previously exported log

use crate::application::Dashboard;
use crate::error::Result;
use crate::infrastructure::SessionStore;
use std::fs;
use std::path::Path;

/// Read an exported CSV file and build its dashboard.
///
/// The file is only read; nothing is kept once the report is printed.
pub fn load_report(path: &Path) -> Result<Dashboard> {
    let bytes = fs::read(path)?;
    let store = SessionStore::from_csv(&bytes)?;
    Ok(Dashboard::build(&store))
}
