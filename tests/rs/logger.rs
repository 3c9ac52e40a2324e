//! Integration tests for logger behavior.

use hlaqh_progress::logger::{level, set_level, set_level_from_str, Level};
use hlaqh_progress::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARNING"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn set_level_round_trips() {
    set_level(Level::Warn);
    assert_eq!(level(), Level::Warn);
    set_level(Level::Debug);
    assert_eq!(level(), Level::Debug);
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration {}", 42);
    verbose!("verbose integration");
}
