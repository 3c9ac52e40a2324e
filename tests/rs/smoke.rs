//! Integration smoke tests for `hlaqh_progress`

use hlaqh_progress::core::progress::compute_progress;
use hlaqh_progress::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn first_surah_is_recorded() {
    let report = compute_progress(Some(1), Some(7));
    assert_eq!(report.memorized_ayahs, 7);
    assert_eq!(report.completed_surahs, 1);
}
