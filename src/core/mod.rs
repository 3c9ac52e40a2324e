//! Core domain: the Quran table, progress and goal computation, rosters,
//! exports and reports

pub mod config;
pub mod goal;
pub mod models;
pub mod progress;
pub mod progress_export;
pub mod quran;
pub mod report;
pub mod roster;

/// Returns the current version of the `hlaqh-progress` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
