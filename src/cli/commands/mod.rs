//! CLI command handlers for `hlaqh`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod goal;
pub mod progress;
pub mod report;
pub mod roster;
pub mod surah;

use hlaqh_progress::core::progress::Position;
use hlaqh_progress::core::quran::{ayah_options, resolve_surah, Surah};

/// Resolve a surah argument (id or name), formatting a CLI error on failure
pub(crate) fn surah_arg(value: &str) -> Result<&'static Surah, String> {
    resolve_surah(value).ok_or_else(|| format!("✗ Unknown surah: '{value}'"))
}

/// Resolve a surah argument and check `ayah` lies inside it
pub(crate) fn position_arg(surah: &str, ayah: u32) -> Result<(&'static Surah, Position), String> {
    let surah = surah_arg(surah)?;
    let valid = ayah_options(surah.id);
    if !valid.contains(&ayah) {
        return Err(format!(
            "✗ {} has ayahs {}-{}, got {ayah}",
            surah.english_name,
            valid.start(),
            valid.end()
        ));
    }
    Ok((surah, Position::new(surah.id, ayah)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_arg_checks_ayah_range() {
        let (surah, position) = position_arg("Al-Falaq", 5).expect("valid position");
        assert_eq!(surah.id, 113);
        assert_eq!(position, Position::new(113, 5));

        assert!(position_arg("113", 0).is_err());
        assert!(position_arg("113", 6).is_err());
        assert!(position_arg("999", 1).is_err());
    }
}
