//! sleepvault - Personal sleep tracker
//!
//! Log nightly sleep and energy in an interactive terminal session, follow
//! good-sleep streaks and badges, review weekly averages and trend charts,
//! and export the log as CSV. Entries live only as long as the session.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SleepVaultError;
