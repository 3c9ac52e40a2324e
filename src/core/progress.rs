//! Memorization progress computation
//!
//! Maps a student's recorded position (surah + ayah) to progress metrics
//! under the memorization order defined in [`crate::core::quran::order`].
//!
//! Every public function here is fail-soft: unknown surah ids and missing
//! positions produce neutral values (`0`, the zero-state report) instead of
//! errors, so a stale record never breaks a progress view. Callers that
//! need to tell "not started" apart from "bad data" use [`assess_progress`].

use crate::core::quran::{
    find_surah, memorization_position, next_in_curriculum, order::totals_before, Surah,
    TOTAL_AYAHS, TOTAL_QURAN_PAGES,
};
use crate::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// A point in the Quran: the last ayah reached within a surah
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Canonical surah id
    pub surah_id: u32,
    /// Ayah number within the surah
    pub ayah: u32,
}

impl Position {
    /// Create a new position
    #[must_use]
    pub const fn new(surah_id: u32, ayah: u32) -> Self {
        Self { surah_id, ayah }
    }

    /// Build a position from nullable stored columns.
    ///
    /// Returns `None` when either part is missing or zero, which is how an
    /// unset position is stored.
    #[must_use]
    pub fn from_parts(surah_id: Option<u32>, ayah: Option<u32>) -> Option<Self> {
        match (surah_id, ayah) {
            (Some(surah_id), Some(ayah)) if surah_id != 0 && ayah != 0 => {
                Some(Self::new(surah_id, ayah))
            }
            _ => None,
        }
    }

    /// The surah this position refers to, if the id is known
    #[must_use]
    pub fn surah(&self) -> Option<&'static Surah> {
        find_surah(self.surah_id)
    }

    /// Curriculum position of the surah (0 if unknown)
    #[must_use]
    pub fn memorization_position(&self) -> u32 {
        memorization_position(self.surah_id)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.surah() {
            Some(surah) => write!(
                f,
                "{} ({}) ayah {}",
                surah.english_name, surah.id, self.ayah
            ),
            None => write!(f, "surah #{} ayah {}", self.surah_id, self.ayah),
        }
    }
}

/// Returned by the strict lookups when a surah id is not in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurahNotFoundError {
    /// The id that failed to resolve
    pub surah_id: u32,
}

impl fmt::Display for SurahNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Surah not found: {}", self.surah_id)
    }
}

impl Error for SurahNotFoundError {}

/// Pages covered by the first `ayah_number` ayahs of a surah.
///
/// Saturates at the surah's `total_pages` once `ayah_number` reaches the
/// ayah count. Otherwise the ayah fraction is scaled to pages and rounded
/// up, so a partially memorized page counts as reached.
///
/// # Errors
/// Returns [`SurahNotFoundError`] if `surah_id` is not a known surah.
pub fn try_pages_for_partial_surah(
    surah_id: u32,
    ayah_number: u32,
) -> Result<u32, SurahNotFoundError> {
    let surah = find_surah(surah_id).ok_or(SurahNotFoundError { surah_id })?;
    if ayah_number >= surah.ayah_count {
        return Ok(surah.total_pages);
    }
    // ceil(ayah / count * pages) without going through floats
    Ok((ayah_number * surah.total_pages).div_ceil(surah.ayah_count))
}

/// Fail-soft form of [`try_pages_for_partial_surah`]: unknown ids give `0`
#[must_use]
pub fn pages_for_partial_surah(surah_id: u32, ayah_number: u32) -> u32 {
    try_pages_for_partial_surah(surah_id, ayah_number).unwrap_or_else(|e| {
        debug!("{e}; counting 0 pages");
        0
    })
}

/// Approximate print page on which an ayah sits, or `0` for an unknown surah.
///
/// Interpolates linearly across the surah's page span and clamps the
/// result to that span.
#[must_use]
pub fn page_number(surah_id: u32, ayah: u32) -> u32 {
    let Some(surah) = find_surah(surah_id) else {
        return 0;
    };
    let ayah_index = ayah.clamp(1, surah.ayah_count) - 1;
    let offset = ayah_index * surah.page_span() / surah.ayah_count;
    (surah.start_page + offset).min(surah.end_page)
}

/// Next ayah to memorize after `position`, following the curriculum.
///
/// Inside a surah this is the following ayah; after its last ayah it is the
/// first ayah of the next surah in memorization order. At the very end of
/// the curriculum the last ayah is returned unchanged.
#[must_use]
pub fn next_position(position: Position) -> Option<Position> {
    let surah = position.surah()?;
    if position.ayah < surah.ayah_count {
        return Some(Position::new(surah.id, position.ayah + 1));
    }
    Some(next_in_curriculum(surah.id).map_or_else(
        || Position::new(surah.id, surah.ayah_count),
        |next| Position::new(next.id, 1),
    ))
}

/// Round to one decimal place
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Snapshot of a student's memorization completeness
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    /// Ayahs in the whole Quran (0 in the zero-state)
    pub total_ayahs: u32,
    /// Ayahs memorized so far; an ayah overcount is carried through unclamped
    pub memorized_ayahs: u64,
    /// Ayah-based completion, one decimal place
    pub percentage: f64,
    /// Surahs fully memorized
    pub completed_surahs: u32,
    /// Surah the student is currently in
    pub current_surah: Option<&'static Surah>,
    /// `total_ayahs - memorized_ayahs`; negative only for inconsistent data
    pub remaining_ayahs: i64,
    /// Pages in the reference edition
    pub total_pages: u32,
    /// Pages memorized so far
    pub memorized_pages: u32,
    /// Page-based completion, one decimal place
    pub pages_percentage: f64,
    /// `total_pages - memorized_pages`
    pub remaining_pages: i64,
}

impl ProgressReport {
    /// The "no progress recorded" report
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            total_ayahs: 0,
            memorized_ayahs: 0,
            percentage: 0.0,
            completed_surahs: 0,
            current_surah: None,
            remaining_ayahs: 0,
            total_pages: TOTAL_QURAN_PAGES,
            memorized_pages: 0,
            pages_percentage: 0.0,
            remaining_pages: TOTAL_QURAN_PAGES as i64,
        }
    }

    /// Whether this is the zero-state report
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.current_surah.is_none()
    }

    /// Colour band for the ayah percentage
    #[must_use]
    pub fn tier(&self) -> ProgressTier {
        ProgressTier::from_percentage(self.percentage)
    }
}

impl Default for ProgressReport {
    fn default() -> Self {
        Self::zero()
    }
}

/// Result of assessing a stored position
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressOutcome {
    /// A valid position produced a report
    Recorded(ProgressReport),
    /// No position has been recorded yet
    NotStarted,
    /// The stored surah id does not exist
    UnknownReference {
        /// The dangling surah id
        surah_id: u32,
    },
}

impl ProgressOutcome {
    /// Collapse to a report, using the zero-state for both non-recorded cases
    #[must_use]
    pub fn into_report(self) -> ProgressReport {
        match self {
            Self::Recorded(report) => report,
            Self::NotStarted | Self::UnknownReference { .. } => ProgressReport::zero(),
        }
    }

    /// Whether the outcome carries a real report
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded(_))
    }
}

/// Compute progress while keeping "not started" and "unknown surah" apart
#[must_use]
pub fn assess_progress(surah_id: Option<u32>, ayah_number: Option<u32>) -> ProgressOutcome {
    let Some(position) = Position::from_parts(surah_id, ayah_number) else {
        return ProgressOutcome::NotStarted;
    };
    let Some(current_surah) = position.surah() else {
        debug!("No surah with id {}; reporting zero progress", position.surah_id);
        return ProgressOutcome::UnknownReference {
            surah_id: position.surah_id,
        };
    };

    let current_position = current_surah.memorization_order;
    let (ayahs_before, pages_before) = totals_before(current_position);

    let memorized_ayahs = u64::from(ayahs_before) + u64::from(position.ayah);
    let memorized_pages = pages_before + pages_for_partial_surah(current_surah.id, position.ayah);

    let total_ayahs = TOTAL_AYAHS;
    let total_pages = TOTAL_QURAN_PAGES;

    let mut completed_surahs = current_position - 1;
    if position.ayah == current_surah.ayah_count {
        completed_surahs += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let percentage = round_to_tenth(memorized_ayahs as f64 / f64::from(total_ayahs) * 100.0);
    let remaining_ayahs =
        i64::from(total_ayahs) - i64::try_from(memorized_ayahs).unwrap_or(i64::MAX);

    ProgressOutcome::Recorded(ProgressReport {
        total_ayahs,
        memorized_ayahs,
        percentage,
        completed_surahs,
        current_surah: Some(current_surah),
        remaining_ayahs,
        total_pages,
        memorized_pages,
        pages_percentage: round_to_tenth(
            f64::from(memorized_pages) / f64::from(total_pages) * 100.0,
        ),
        remaining_pages: i64::from(total_pages) - i64::from(memorized_pages),
    })
}

/// Compute progress for a stored position.
///
/// Missing positions and unknown surah ids both yield
/// [`ProgressReport::zero`]. Percentages are not clamped.
#[must_use]
pub fn compute_progress(surah_id: Option<u32>, ayah_number: Option<u32>) -> ProgressReport {
    assess_progress(surah_id, ayah_number).into_report()
}

/// Colour bands used when displaying a percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTier {
    /// 90% and above
    Excellent,
    /// 70% to 90%
    Good,
    /// 50% to 70%
    Fair,
    /// 30% to 50%
    Weak,
    /// Below 30%
    Low,
}

impl ProgressTier {
    /// Classify a percentage
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Excellent
        } else if percentage >= 70.0 {
            Self::Good
        } else if percentage >= 50.0 {
            Self::Fair
        } else if percentage >= 30.0 {
            Self::Weak
        } else {
            Self::Low
        }
    }

    /// Lowercase label, also used as a CSS class suffix
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Weak => "weak",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ProgressTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_pages_round_up() {
        // Al-Mulk: 30 ayahs over 2 pages
        assert_eq!(pages_for_partial_surah(67, 15), 1);
        assert_eq!(pages_for_partial_surah(67, 16), 2);
        // Al-Baqarah: 286 ayahs over 48 pages, halfway is exactly 24
        assert_eq!(pages_for_partial_surah(2, 143), 24);
        assert_eq!(pages_for_partial_surah(2, 1), 1);
    }

    #[test]
    fn zero_ayahs_cover_zero_pages() {
        assert_eq!(pages_for_partial_surah(2, 0), 0);
    }

    #[test]
    fn partial_pages_saturate() {
        assert_eq!(pages_for_partial_surah(2, 286), 48);
        assert_eq!(pages_for_partial_surah(2, 1286), 48);
    }

    #[test]
    fn unknown_surah_has_no_pages() {
        assert_eq!(pages_for_partial_surah(0, 3), 0);
        assert_eq!(
            try_pages_for_partial_surah(99_999, 3),
            Err(SurahNotFoundError { surah_id: 99_999 })
        );
        assert_eq!(
            SurahNotFoundError { surah_id: 7 }.to_string(),
            "Surah not found: 7"
        );
    }

    #[test]
    fn page_numbers_stay_inside_the_span() {
        assert_eq!(page_number(1, 1), 1);
        assert_eq!(page_number(2, 1), 2);
        assert_eq!(page_number(2, 286), 50);
        assert_eq!(page_number(2, 5000), 50);
        assert_eq!(page_number(114, 0), 604);
        assert_eq!(page_number(0, 1), 0);
    }

    #[test]
    fn position_from_parts_rejects_unset_values() {
        assert_eq!(Position::from_parts(Some(113), Some(5)), Some(Position::new(113, 5)));
        assert_eq!(Position::from_parts(None, Some(5)), None);
        assert_eq!(Position::from_parts(Some(113), None), None);
        assert_eq!(Position::from_parts(Some(0), Some(5)), None);
        assert_eq!(Position::from_parts(Some(113), Some(0)), None);
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(113, 5).to_string(), "Al-Falaq (113) ayah 5");
        assert_eq!(Position::new(900, 1).to_string(), "surah #900 ayah 1");
    }

    #[test]
    fn next_position_walks_the_curriculum() {
        assert_eq!(next_position(Position::new(113, 2)), Some(Position::new(113, 3)));
        // Al-Fatihah complete: An-Nas comes next
        assert_eq!(next_position(Position::new(1, 7)), Some(Position::new(114, 1)));
        // End of the curriculum stays put
        assert_eq!(next_position(Position::new(2, 286)), Some(Position::new(2, 286)));
        assert_eq!(next_position(Position::new(0, 1)), None);
    }

    #[test]
    fn falaq_scenario() {
        let report = compute_progress(Some(113), Some(5));
        assert_eq!(report.completed_surahs, 3);
        assert_eq!(report.memorized_ayahs, 18);
        assert_eq!(report.memorized_pages, 3);
        assert!((report.percentage - 0.3).abs() < f64::EPSILON);
        assert!((report.pages_percentage - 0.5).abs() < f64::EPSILON);
        assert_eq!(report.remaining_ayahs, 6218);
        assert_eq!(report.remaining_pages, 601);
        assert_eq!(report.current_surah.map(|s| s.id), Some(113));
    }

    #[test]
    fn ayah_overcount_is_carried_through() {
        let report = compute_progress(Some(2), Some(u32::MAX));
        assert_eq!(report.memorized_ayahs, 5950 + u64::from(u32::MAX));
        assert_eq!(report.remaining_ayahs, 6236 - 5950 - i64::from(u32::MAX));
        assert!(report.percentage > 100.0);
        assert_eq!(report.completed_surahs, 113);
        assert_eq!(report.memorized_pages, 622);
    }

    #[test]
    fn partial_current_surah_is_not_completed() {
        let report = compute_progress(Some(113), Some(4));
        assert_eq!(report.completed_surahs, 2);
    }

    #[test]
    fn outcome_distinguishes_empty_from_invalid() {
        assert_eq!(assess_progress(None, None), ProgressOutcome::NotStarted);
        assert_eq!(
            assess_progress(Some(99_999), Some(3)),
            ProgressOutcome::UnknownReference { surah_id: 99_999 }
        );
        assert!(assess_progress(Some(1), Some(7)).is_recorded());
    }

    #[test]
    fn zero_state_shape() {
        let zero = ProgressReport::zero();
        assert_eq!(zero.total_ayahs, 0);
        assert_eq!(zero.total_pages, 604);
        assert_eq!(zero.remaining_pages, 604);
        assert!(zero.is_zero());
        assert_eq!(ProgressReport::default(), zero);
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(ProgressTier::from_percentage(95.0), ProgressTier::Excellent);
        assert_eq!(ProgressTier::from_percentage(90.0), ProgressTier::Excellent);
        assert_eq!(ProgressTier::from_percentage(70.0), ProgressTier::Good);
        assert_eq!(ProgressTier::from_percentage(55.5), ProgressTier::Fair);
        assert_eq!(ProgressTier::from_percentage(30.0), ProgressTier::Weak);
        assert_eq!(ProgressTier::from_percentage(0.0), ProgressTier::Low);
        assert_eq!(ProgressTier::Good.to_string(), "good");
    }

    #[test]
    fn report_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(compute_progress(Some(1), Some(7))).unwrap();
        assert_eq!(json["totalAyahs"], 6236);
        assert_eq!(json["completedSurahs"], 1);
        assert_eq!(json["currentSurah"]["ayahCount"], 7);
        assert_eq!(json["remainingPages"], 603);
    }
}
