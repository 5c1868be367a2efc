//! Interactive logging session
//!
//! A session owns its entry store for as long as it runs. Nothing is written
//! to disk unless the user exports.

use crate::application::{export_log, log_sleep, Dashboard, ExportTarget};
use crate::cli::input::SessionCommand;
use crate::cli::output::{
    format_banner, format_charts, format_dashboard, format_insights, format_log_table,
    format_streak,
};
use crate::error::Result;
use crate::infrastructure::{Config, EntryStore, SessionStore};
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  add <hours> [score] [date] [-- notes]   log a night (score defaults to 7, date to today)
  log                                     last 7 entries
  streak                                  current streak and badge
  insights                                weekly averages
  charts                                  sleep and energy trends
  dashboard                               everything above
  export [path|-]                         write the log as CSV
  help                                    this message
  quit                                    end the session

Dates: today, yesterday, monday..sunday, last-monday, YYYY-MM-DD
";

/// Result of handling one session line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            quit: false,
        }
    }
}

/// One user's logging session
pub struct Session<S: EntryStore = SessionStore> {
    store: S,
    config: Config,
    rng: StdRng,
    today: Option<NaiveDate>,
    exported: usize,
}

impl Session<SessionStore> {
    pub fn new(config: Config) -> Self {
        Session::with_store(SessionStore::new(), config)
    }
}

impl<S: EntryStore> Session<S> {
    pub fn with_store(store: S, config: Config) -> Self {
        Session {
            store,
            config,
            rng: StdRng::from_entropy(),
            today: None,
            exported: 0,
        }
    }

    /// Use a fixed random generator for quote selection
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Pin the date used for `today` and relative dates
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Handle one input line
    pub fn handle(&mut self, line: &str) -> Result<Reply> {
        let theme = self.config.theme;

        let reply = match SessionCommand::parse(line)? {
            SessionCommand::Nothing => Reply::text(""),
            SessionCommand::Add(form) => {
                let today = self.today();
                log_sleep(&mut self.store, form, today)?;

                let mut text = theme.entry_added_message(&mut self.rng);
                text.push('\n');
                if self.config.dashboard_after_add {
                    text.push('\n');
                    text.push_str(&format_dashboard(&Dashboard::build(&self.store), theme));
                }
                Reply::text(text)
            }
            SessionCommand::Log => Reply::text(format_log_table(&Dashboard::build(&self.store))),
            SessionCommand::Streak => {
                let dashboard = Dashboard::build(&self.store);
                let text = format_streak(dashboard.streak, dashboard.badge);
                if text.is_empty() {
                    Reply::text("Current streak: 0 nights.\n")
                } else {
                    Reply::text(text)
                }
            }
            SessionCommand::Insights => {
                let dashboard = Dashboard::build(&self.store);
                Reply::text(format_insights(dashboard.weekly.as_ref()))
            }
            SessionCommand::Charts => {
                Reply::text(format_charts(&Dashboard::build(&self.store), theme))
            }
            SessionCommand::Dashboard => {
                Reply::text(format_dashboard(&Dashboard::build(&self.store), theme))
            }
            SessionCommand::Export(arg) => {
                let target = ExportTarget::from_arg(arg.as_deref(), &self.config.export_path);
                let mut buffer = Vec::new();
                let rows = export_log(&self.store, &target, &mut buffer)?;
                self.exported = rows;

                match target {
                    ExportTarget::Stdout => Reply::text(String::from_utf8_lossy(&buffer)),
                    ExportTarget::File(path) => Reply::text(format!(
                        "Exported {} entries to {}\n",
                        rows,
                        path.display()
                    )),
                }
            }
            SessionCommand::Help => Reply::text(HELP),
            SessionCommand::Quit => Reply {
                text: self.farewell(),
                quit: true,
            },
        };

        Ok(reply)
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Input and export errors are reported and the session continues; I/O
    /// errors on `input` or `output` end it.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        write!(output, "{}", format_banner(self.config.theme))?;
        writeln!(output, "Type `help` for commands.")?;

        for line in input.lines() {
            let line = line?;
            match self.handle(&line) {
                Ok(reply) => {
                    write!(output, "{}", reply.text)?;
                    if reply.quit {
                        return Ok(());
                    }
                }
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(error = %e, input = %line, "rejected session input");
                    writeln!(output, "Error: {}", e.display_with_suggestions())?;
                }
                Err(e) => return Err(e),
            }
            output.flush()?;
        }

        write!(output, "{}", self.farewell())?;
        Ok(())
    }

    fn farewell(&self) -> String {
        let unsaved = self.store.len().saturating_sub(self.exported);
        if unsaved > 0 {
            format!(
                "Session ended. {} entries not exported are discarded.\n",
                unsaved
            )
        } else {
            "Session ended. Rest well!\n".to_string()
        }
    }
}
