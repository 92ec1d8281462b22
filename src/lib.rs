//! Move files into `<output>/<year>/` renamed after their modification time,
//! sending same-millisecond duplicates to `<output>/collisions/` with a
//! running suffix.

pub mod app;
pub mod cli;
pub mod collisions;
pub mod config;
pub mod error;
pub mod fs_scan;
pub mod materialize;
pub mod naming;
pub mod resolve;
pub mod types;

pub use app::{report, run};
pub use config::AppConfig;
pub use error::OrganizeError;
