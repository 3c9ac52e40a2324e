//! Goal tracking toward a target position
//!
//! A teacher or parent sets a target (surah + ayah); these functions measure
//! how much of the curriculum lies between the student's current position
//! and that target.

use crate::core::progress::{next_position, Position};
use crate::core::quran::{find_surah, order::totals_before, Surah};
use serde::Serialize;

/// Progress toward a goal, in verses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Completion percentage, 0..=100
    pub percentage: u32,
    /// Verses of the goal already memorized
    pub memorized_verses: u32,
    /// Verses the goal spans
    pub total_goal_verses: u32,
}

/// Three-section goal bar: baseline, new progress and remaining
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressBar {
    /// Verses the goal spans
    pub total_goal_verses: u32,
    /// Verses already memorized when the goal was set
    pub baseline_verses: u32,
    /// Verses memorized since the goal was set
    pub new_progress_verses: u32,
    /// Verses still to memorize
    pub remaining_verses: u32,
    /// Baseline share of the bar
    pub baseline_percentage: u32,
    /// New-progress share of the bar
    pub new_progress_percentage: u32,
    /// Remaining share of the bar
    pub remaining_percentage: u32,
}

/// A usable target together with its surah
fn resolve_target(target: Option<Position>) -> Option<(Position, &'static Surah)> {
    let target = target.filter(|t| t.surah_id != 0 && t.ayah != 0)?;
    let surah = find_surah(target.surah_id)?;
    Some((target, surah))
}

/// Verses from the start of the curriculum through `ayah` of `surah`
fn verses_through(surah: &Surah, ayah: u32) -> u32 {
    totals_before(surah.memorization_order).0 + ayah.min(surah.ayah_count)
}

/// Whether `current` is at or past `target` in curriculum order
fn has_reached(
    current: Position,
    current_surah: &Surah,
    target: Position,
    target_surah: &Surah,
) -> bool {
    current_surah.memorization_order > target_surah.memorization_order
        || (current_surah.memorization_order == target_surah.memorization_order
            && current.ayah >= target.ayah)
}

/// Whole-number percentage of `part` in `whole`; callers keep `part <= whole`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(whole) * 100.0).round() as u32
}

/// Progress from `memorized` toward `target`.
///
/// A reached or exceeded goal reports `1/1` verses at 100%. A missing or
/// unknown target gives all zeros. A student with no recorded position is
/// measured from the first ayah of the curriculum.
#[must_use]
pub fn goal_progress(memorized: Option<Position>, target: Option<Position>) -> GoalProgress {
    let Some((target, target_surah)) = resolve_target(target) else {
        return GoalProgress::default();
    };
    let goal_end = verses_through(target_surah, target.ayah);

    let current = memorized.and_then(|p| p.surah().map(|s| (p, s)));
    let (memorized_verses, total_goal_verses) = match current {
        None => (0, goal_end),
        Some((current, current_surah)) => {
            if has_reached(current, current_surah, target, target_surah) {
                (1, 1)
            } else {
                (0, goal_end.saturating_sub(verses_through(current_surah, current.ayah)))
            }
        }
    };

    if total_goal_verses == 0 {
        return GoalProgress::default();
    }

    GoalProgress {
        percentage: percent(memorized_verses, total_goal_verses).min(100),
        memorized_verses,
        total_goal_verses,
    }
}

/// Goal bar measured from `baseline` (the position when the goal was set).
///
/// With no baseline the goal starts before the first ayah of Al-Fatihah.
/// A target already behind the baseline spans a single verse.
#[must_use]
pub fn goal_progress_bar_from(
    baseline: Option<Position>,
    current: Option<Position>,
    target: Option<Position>,
) -> GoalProgressBar {
    let Some((target, target_surah)) = resolve_target(target) else {
        return GoalProgressBar::default();
    };

    let goal_end = verses_through(target_surah, target.ayah);
    let goal_start = baseline
        .and_then(|b| b.surah().map(|s| verses_through(s, b.ayah)))
        .unwrap_or(0);
    let total_goal_verses = if goal_start <= goal_end {
        goal_end - goal_start
    } else {
        1
    };

    let new_progress_verses = match current.and_then(|c| c.surah().map(|s| (c, s))) {
        None => 0,
        Some((current, current_surah)) => {
            if has_reached(current, current_surah, target, target_surah) {
                total_goal_verses
            } else {
                verses_through(current_surah, current.ayah)
                    .saturating_sub(goal_start)
                    .min(total_goal_verses)
            }
        }
    };
    let remaining_verses = total_goal_verses - new_progress_verses;

    GoalProgressBar {
        total_goal_verses,
        baseline_verses: 0,
        new_progress_verses,
        remaining_verses,
        baseline_percentage: 0,
        new_progress_percentage: percent(new_progress_verses, total_goal_verses),
        remaining_percentage: percent(remaining_verses, total_goal_verses),
    }
}

/// Goal bar for a goal set at the student's current position
#[must_use]
pub fn goal_progress_bar(
    memorized: Option<Position>,
    target: Option<Position>,
) -> GoalProgressBar {
    goal_progress_bar_from(memorized, memorized, target)
}

/// Ayah range still to memorize before reaching `target`.
///
/// Starts at the ayah after `memorized` (or the first ayah of Al-Fatihah
/// when nothing is recorded). `None` when there is no valid target or it
/// has already been reached.
#[must_use]
pub fn goal_span(
    memorized: Option<Position>,
    target: Option<Position>,
) -> Option<(Position, Position)> {
    let (target, target_surah) = resolve_target(target)?;
    let Some((current, current_surah)) = memorized.and_then(|p| p.surah().map(|s| (p, s))) else {
        return Some((Position::new(1, 1), target));
    };
    if has_reached(current, current_surah, target, target_surah) {
        return None;
    }
    Some((next_position(current)?, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_target_is_all_zero() {
        assert_eq!(goal_progress(Some(Position::new(113, 5)), None), GoalProgress::default());
        assert_eq!(
            goal_progress(None, Some(Position::new(0, 3))),
            GoalProgress::default()
        );
        assert_eq!(
            goal_progress(None, Some(Position::new(999, 3))),
            GoalProgress::default()
        );
    }

    #[test]
    fn not_started_counts_from_fatiha() {
        // Al-Fatihah (7) + An-Nas (6)
        let goal = goal_progress(None, Some(Position::new(114, 6)));
        assert_eq!(goal.total_goal_verses, 13);
        assert_eq!(goal.memorized_verses, 0);
        assert_eq!(goal.percentage, 0);
    }

    #[test]
    fn not_started_caps_target_ayah() {
        let goal = goal_progress(None, Some(Position::new(114, 60)));
        assert_eq!(goal.total_goal_verses, 13);
    }

    #[test]
    fn spans_multiple_surahs() {
        // From the end of Al-Falaq: Al-Ikhlas (4) then Al-Masad up to ayah 3
        let goal = goal_progress(Some(Position::new(113, 5)), Some(Position::new(111, 3)));
        assert_eq!(goal.total_goal_verses, 7);
        assert_eq!(goal.memorized_verses, 0);
    }

    #[test]
    fn same_surah_behind_target() {
        let goal = goal_progress(Some(Position::new(67, 10)), Some(Position::new(67, 25)));
        assert_eq!(goal.total_goal_verses, 15);
    }

    #[test]
    fn reached_goal_is_complete() {
        let past = goal_progress(Some(Position::new(112, 4)), Some(Position::new(113, 5)));
        assert_eq!(past, GoalProgress { percentage: 100, memorized_verses: 1, total_goal_verses: 1 });

        let exact = goal_progress(Some(Position::new(67, 25)), Some(Position::new(67, 25)));
        assert_eq!(exact.percentage, 100);
    }

    #[test]
    fn bar_for_fresh_goal_is_all_remaining() {
        let bar = goal_progress_bar(Some(Position::new(113, 5)), Some(Position::new(111, 3)));
        assert_eq!(bar.total_goal_verses, 7);
        assert_eq!(bar.new_progress_verses, 0);
        assert_eq!(bar.remaining_verses, 7);
        assert_eq!(bar.remaining_percentage, 100);
        assert_eq!(bar.new_progress_percentage, 0);
    }

    #[test]
    fn bar_tracks_progress_since_baseline() {
        // Goal set at the end of Al-Falaq, student now finished Al-Ikhlas
        let bar = goal_progress_bar_from(
            Some(Position::new(113, 5)),
            Some(Position::new(112, 4)),
            Some(Position::new(111, 3)),
        );
        assert_eq!(bar.total_goal_verses, 7);
        assert_eq!(bar.new_progress_verses, 4);
        assert_eq!(bar.remaining_verses, 3);
        assert_eq!(bar.new_progress_percentage, 57);
        assert_eq!(bar.remaining_percentage, 43);
    }

    #[test]
    fn bar_for_reached_goal_is_all_progress() {
        let bar = goal_progress_bar(Some(Position::new(112, 4)), Some(Position::new(113, 5)));
        assert_eq!(bar.total_goal_verses, 1);
        assert_eq!(bar.new_progress_verses, 1);
        assert_eq!(bar.remaining_verses, 0);
        assert_eq!(bar.new_progress_percentage, 100);
    }

    #[test]
    fn bar_without_target_is_empty() {
        assert_eq!(goal_progress_bar(None, None), GoalProgressBar::default());
    }

    #[test]
    fn span_starts_after_current_position() {
        assert_eq!(
            goal_span(Some(Position::new(113, 5)), Some(Position::new(111, 3))),
            Some((Position::new(112, 1), Position::new(111, 3)))
        );
        assert_eq!(
            goal_span(None, Some(Position::new(114, 6))),
            Some((Position::new(1, 1), Position::new(114, 6)))
        );
        assert_eq!(goal_span(Some(Position::new(112, 4)), Some(Position::new(113, 5))), None);
        assert_eq!(goal_span(Some(Position::new(112, 4)), None), None);
    }
}
