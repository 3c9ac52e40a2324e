//! Quran memorization progress for `hlaqh`
//!
//! Maps a student's recorded position (surah + ayah) to progress metrics
//! under a fixed memorization curriculum, tracks goals, and turns class
//! rosters into CSV exports and reports.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
