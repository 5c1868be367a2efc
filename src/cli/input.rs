//! Session line grammar
//!
//! `add <hours> [score] [date] [-- notes]`; everything after a standalone
//! `--` is taken verbatim as notes.

use crate::application::SleepForm;
use crate::domain::DateReference;
use crate::error::{Result, SleepVaultError};

/// One parsed session line
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Add(SleepForm),
    Log,
    Streak,
    Insights,
    Charts,
    Dashboard,
    /// Optional path, `-` for stdout
    Export(Option<String>),
    Help,
    Quit,
    /// Blank line
    Nothing,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "" => Ok(SessionCommand::Nothing),
            "add" | "a" => parse_add(rest).map(SessionCommand::Add),
            "log" | "table" => Ok(SessionCommand::Log),
            "streak" => Ok(SessionCommand::Streak),
            "insights" | "week" => Ok(SessionCommand::Insights),
            "charts" | "chart" => Ok(SessionCommand::Charts),
            "dashboard" | "show" => Ok(SessionCommand::Dashboard),
            "export" => Ok(SessionCommand::Export(
                (!rest.is_empty()).then(|| rest.to_string()),
            )),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            _ => Err(SleepVaultError::UnknownCommand(name.to_string())),
        }
    }
}

fn parse_add(args: &str) -> Result<SleepForm> {
    let (args, notes) = split_notes(args);
    let mut tokens = args.split_whitespace().peekable();

    let hours_token = tokens
        .next()
        .ok_or_else(|| SleepVaultError::InvalidEntry("hours slept is required".to_string()))?;
    let hours: f64 = hours_token.parse().map_err(|_| {
        SleepVaultError::InvalidEntry(format!("hours must be a number, got '{}'", hours_token))
    })?;

    let mut form = SleepForm::new(hours);
    form.notes = notes.to_string();

    if let Some(token) = tokens.next_if(|t| t.chars().all(|c| c.is_ascii_digit())) {
        let score = token.parse().map_err(|_| {
            SleepVaultError::InvalidEntry(format!("energy score must be 1 to 10, got {}", token))
        })?;
        form.score = Some(score);
    }

    if let Some(token) = tokens.next() {
        // Accept `last monday` as two tokens as well as `last-monday`
        let reference = if token.eq_ignore_ascii_case("last") {
            match tokens.next() {
                Some(day) => format!("{} {}", token, day),
                None => token.to_string(),
            }
        } else {
            token.to_string()
        };
        form.date = Some(DateReference::parse(&reference)?);
    }

    if let Some(extra) = tokens.next() {
        return Err(SleepVaultError::InvalidEntry(format!(
            "unexpected argument '{}'; put notes after --",
            extra
        )));
    }

    Ok(form)
}

/// Split at the first standalone `--` token
fn split_notes(args: &str) -> (&str, &str) {
    let mut offset = 0;
    for token in args.split_whitespace() {
        let start = args[offset..]
            .find(token)
            .map(|i| i + offset)
            .unwrap_or(offset);
        offset = start + token.len();
        if token == "--" {
            return (&args[..start], args[offset..].trim());
        }
    }
    (args, "")
}
