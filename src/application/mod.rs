//! Application layer - Use cases and orchestration

pub mod dashboard;
pub mod export;
pub mod log_sleep;
pub mod manage_config;
pub mod report;

pub use dashboard::Dashboard;
pub use export::{export_log, ExportTarget};
pub use log_sleep::{log_sleep, SleepForm};
pub use manage_config::ConfigService;
pub use report::load_report;
