//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sleepvault")]
#[command(about = "Personal sleep tracker with streaks, badges and weekly insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./sleepvault.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Theme for this run (classic, premium)
    #[arg(short, long, global = true)]
    pub theme: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive logging session (default)
    Session,

    /// Show the dashboard for an exported CSV log
    Report {
        /// CSV file written by `export`
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },

    /// List the badge tiers and the streaks that unlock them
    Badges,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
