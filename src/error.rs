//! Error types for sleepvault

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sleepvault
#[derive(Debug, Error)]
pub enum SleepVaultError {
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export to {} failed: {source}", path.display())]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Import failed at line {line}: {reason}")]
    Import { line: u64, reason: String },

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SleepVaultError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SleepVaultError::UnknownCommand(_) => 2,
            SleepVaultError::InvalidEntry(_) | SleepVaultError::InvalidDate(_) => 3,
            SleepVaultError::Csv(_) | SleepVaultError::Import { .. } => 4,
            _ => 1,
        }
    }

    /// Whether a session can keep running after this error.
    ///
    /// Only I/O on the session streams is fatal; a failed export is not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SleepVaultError::Io(_))
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SleepVaultError::InvalidEntry(msg) => {
                format!(
                    "Invalid entry: {}\n\n\
                    Usage: add <hours> [score] [date] [-- notes]\n\
                    • hours: 0 to 24 (e.g., 7.5)\n\
                    • score: 1 (exhausted) to 10 (peak energy), default 7\n\
                    • date: defaults to today",
                    msg
                )
            }
            SleepVaultError::InvalidDate(date) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last-monday, last-friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)",
                    date
                )
            }
            SleepVaultError::UnknownCommand(cmd) => {
                format!(
                    "Unknown command: '{}'\n\n\
                    Commands: add, log, streak, insights, charts, dashboard, export, help, quit",
                    cmd
                )
            }
            SleepVaultError::Export { path, source } => {
                format!(
                    "Could not write {}: {}\n\n\
                    The log is still in this session. Try another path, e.g. `export sleep_log.csv`,\n\
                    or `export -` to print it.",
                    path.display(),
                    source
                )
            }
            SleepVaultError::Config(msg) => {
                if msg.contains("Invalid theme") {
                    format!(
                        "{}\n\n\
                        Valid themes: classic, premium\n\
                        Example: sleepvault config theme premium",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SleepVaultError
pub type Result<T> = std::result::Result<T, SleepVaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_entry_suggestions() {
        let err = SleepVaultError::InvalidEntry("hours must be between 0 and 24".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("add <hours>"));
        assert!(msg.contains("default 7"));
    }

    #[test]
    fn test_invalid_date_examples() {
        let err = SleepVaultError::InvalidDate("someday".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'someday'"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("last-monday"));
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let err = SleepVaultError::UnknownCommand("sleep".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("dashboard"));
        assert!(msg.contains("export"));
    }

    #[test]
    fn test_config_invalid_theme_suggestions() {
        let err = SleepVaultError::Config("Invalid theme: 'neon'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("classic, premium"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(SleepVaultError::UnknownCommand("x".into()).exit_code(), 2);
        assert_eq!(SleepVaultError::InvalidEntry("x".into()).exit_code(), 3);
        assert_eq!(SleepVaultError::InvalidDate("x".into()).exit_code(), 3);
        assert_eq!(
            SleepVaultError::Import {
                line: 2,
                reason: "bad".into()
            }
            .exit_code(),
            4
        );
        assert_eq!(SleepVaultError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_io_errors_end_the_session() {
        let io = SleepVaultError::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe"));
        assert!(!io.is_recoverable());
        assert!(SleepVaultError::InvalidEntry("x".into()).is_recoverable());
    }

    #[test]
    fn test_export_failure_is_recoverable() {
        let err = SleepVaultError::Export {
            path: PathBuf::from("exports"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.exit_code(), 1);
        assert!(err.display_with_suggestions().contains("still in this session"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = SleepVaultError::Import {
            line: 3,
            reason: "score out of range".to_string(),
        };
        assert_eq!(
            err.display_with_suggestions(),
            "Import failed at line 3: score out of range"
        );
    }
}
