//! CLI layer - Command-line interface and text presentation

pub mod chart;
pub mod commands;
pub mod input;
pub mod output;
pub mod session;

pub use commands::{Cli, Commands};
pub use output::{format_badge_table, format_dashboard};
pub use session::Session;
