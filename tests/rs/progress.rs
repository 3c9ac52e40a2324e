//! Integration tests for progress computation over the full surah table

use hlaqh_progress::core::goal::goal_progress;
use hlaqh_progress::core::progress::{
    compute_progress, pages_for_partial_surah, Position, ProgressReport,
};
use hlaqh_progress::core::quran::{
    memorization_position, surah_id_at_position, surah_id_from_name, surah_name_from_id, SURAHS,
    TOTAL_AYAHS, TOTAL_QURAN_PAGES,
};

#[test]
fn completing_the_last_surah_completes_the_quran() {
    // Al-Baqarah closes the curriculum
    assert_eq!(memorization_position(2), 114);

    let report = compute_progress(Some(2), Some(286));
    assert_eq!(report.memorized_ayahs, u64::from(TOTAL_AYAHS));
    assert!((report.percentage - 100.0).abs() < f64::EPSILON);
    assert_eq!(report.remaining_ayahs, 0);
    assert_eq!(report.completed_surahs, 114);
}

#[test]
fn page_percentage_is_not_clamped() {
    // Per-surah page counts overlap at shared pages and sum past 604
    let report = compute_progress(Some(2), Some(286));
    assert_eq!(report.memorized_pages, 622);
    assert_eq!(report.total_pages, TOTAL_QURAN_PAGES);
    assert!((report.pages_percentage - 103.0).abs() < f64::EPSILON);
    assert_eq!(report.remaining_pages, -18);
}

#[test]
fn missing_position_is_zero_state() {
    let expected = ProgressReport::zero();
    assert_eq!(compute_progress(None, None), expected);
    assert_eq!(compute_progress(Some(0), Some(0)), expected);
    assert_eq!(compute_progress(Some(113), None), expected);
    assert_eq!(compute_progress(None, Some(5)), expected);

    assert_eq!(expected.total_ayahs, 0);
    assert_eq!(expected.memorized_ayahs, 0);
    assert_eq!(expected.remaining_ayahs, 0);
    assert_eq!(expected.total_pages, 604);
    assert_eq!(expected.remaining_pages, 604);
    assert!(expected.current_surah.is_none());
}

#[test]
fn unknown_surah_is_zero_state() {
    assert_eq!(compute_progress(Some(99_999), Some(3)), ProgressReport::zero());
    assert_eq!(compute_progress(Some(115), Some(1)), ProgressReport::zero());
}

#[test]
fn partial_pages_are_monotonic() {
    for surah in &SURAHS {
        let mut previous = 0;
        for ayah in 0..=surah.ayah_count + 2 {
            let pages = pages_for_partial_surah(surah.id, ayah);
            assert!(
                pages >= previous,
                "pages decreased for surah {} at ayah {ayah}",
                surah.id
            );
            previous = pages;
        }
    }
}

#[test]
fn partial_pages_saturate_past_the_last_ayah() {
    for surah in &SURAHS {
        assert_eq!(
            pages_for_partial_surah(surah.id, surah.ayah_count),
            surah.total_pages
        );
        assert_eq!(
            pages_for_partial_surah(surah.id, surah.ayah_count + 50),
            surah.total_pages
        );
    }
}

#[test]
fn positions_round_trip_for_every_surah() {
    for surah in &SURAHS {
        let position = memorization_position(surah.id);
        assert!((1..=114).contains(&position));
        assert_eq!(surah_id_at_position(position), surah.id);
    }
    assert_eq!(memorization_position(0), 0);
    assert_eq!(surah_id_at_position(0), 0);
    assert_eq!(surah_id_at_position(115), 0);
}

#[test]
fn names_round_trip_for_every_surah() {
    for surah in &SURAHS {
        assert_eq!(surah_id_from_name(surah_name_from_id(surah.id)), surah.id);
        assert_eq!(surah_id_from_name(surah.english_name), surah.id);
    }
    assert_eq!(surah_name_from_id(0), "");
    assert_eq!(surah_id_from_name("Not a surah"), 0);
}

#[test]
fn al_falaq_completed() {
    assert_eq!(memorization_position(113), 3);

    let report = compute_progress(Some(113), Some(5));
    assert_eq!(report.completed_surahs, 3);
    assert_eq!(report.memorized_ayahs, 18);
    assert_eq!(report.current_surah.map(|s| s.english_name), Some("Al-Falaq"));
}

#[test]
fn memorized_ayahs_grow_along_the_curriculum() {
    let mut previous = 0;
    for position in 1..=114 {
        let id = surah_id_at_position(position);
        let last_ayah = SURAHS[id as usize - 1].ayah_count;
        let report = compute_progress(Some(id), Some(last_ayah));
        assert!(report.memorized_ayahs > previous);
        assert_eq!(report.completed_surahs, position);
        previous = report.memorized_ayahs;
    }
}

#[test]
fn goal_from_current_position() {
    let goal = goal_progress(Some(Position::new(113, 5)), Some(Position::new(111, 3)));
    assert_eq!(goal.total_goal_verses, 7);
    assert_eq!(goal.percentage, 0);

    let reached = goal_progress(Some(Position::new(2, 10)), Some(Position::new(67, 30)));
    assert_eq!(reached.percentage, 100);
}
