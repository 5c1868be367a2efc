//! Infrastructure layer - Storage, encoding and configuration

pub mod config;
pub mod csv_codec;
pub mod store;

pub use config::Config;
pub use store::{EntryStore, SessionStore};
