//! Export the sleep log as CSV

use crate::error::{Result, SleepVaultError};
use crate::infrastructure::EntryStore;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where an export is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    Stdout,
    File(PathBuf),
}

impl ExportTarget {
    /// `-` means stdout; no argument means the configured default path
    pub fn from_arg(arg: Option<&str>, default_path: &Path) -> Self {
        match arg {
            Some("-") => ExportTarget::Stdout,
            Some(path) => ExportTarget::File(PathBuf::from(path)),
            None => ExportTarget::File(default_path.to_path_buf()),
        }
    }
}

/// Write the CSV export and return the number of entries written
pub fn export_log<S, W>(store: &S, target: &ExportTarget, stdout: &mut W) -> Result<usize>
where
    S: EntryStore + ?Sized,
    W: Write + ?Sized,
{
    let bytes = store.export_csv()?;

    match target {
        ExportTarget::Stdout => stdout.write_all(&bytes)?,
        ExportTarget::File(path) => write_file(path, &bytes).map_err(|source| {
            SleepVaultError::Export {
                path: path.clone(),
                source,
            }
        })?,
    }

    tracing::info!(?target, rows = store.len(), "export written");
    Ok(store.len())
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)
}
