//! Memorization order
//!
//! Students start with Al-Fatihah, then work backwards from An-Nas toward
//! Al-Baqarah. Positions are 1-based; 0 means "unknown" throughout.

use super::surah::{find_surah, Surah, SURAH_COUNT, SURAH_TABLE};

/// Surah ids indexed by `memorization_order - 1`
const POSITION_INDEX: [u32; SURAH_COUNT] = build_position_index();

const fn build_position_index() -> [u32; SURAH_COUNT] {
    let mut index = [0; SURAH_COUNT];
    let mut i = 0;
    while i < SURAH_COUNT {
        let surah = &SURAH_TABLE[i];
        index[(surah.memorization_order - 1) as usize] = surah.id;
        i += 1;
    }
    index
}

/// Curriculum position (1..=114) of a surah, or `0` if the id is unknown
#[must_use]
pub fn memorization_position(surah_id: u32) -> u32 {
    find_surah(surah_id).map_or(0, |s| s.memorization_order)
}

/// Surah id at a curriculum position, or `0` if the position is out of range
#[must_use]
pub fn surah_id_at_position(position: u32) -> u32 {
    surah_at_position(position).map_or(0, |s| s.id)
}

/// Surah at a curriculum position
#[must_use]
pub fn surah_at_position(position: u32) -> Option<&'static Surah> {
    let index = usize::try_from(position).ok()?.checked_sub(1)?;
    POSITION_INDEX.get(index).and_then(|&id| find_surah(id))
}

/// All surahs in memorization order
pub fn curriculum() -> impl Iterator<Item = &'static Surah> {
    POSITION_INDEX.iter().filter_map(|&id| find_surah(id))
}

/// Ayahs and pages of every surah strictly before `position` in the curriculum
pub(crate) fn totals_before(position: u32) -> (u32, u32) {
    let completed = usize::try_from(position.saturating_sub(1)).unwrap_or(SURAH_COUNT);
    curriculum()
        .take(completed)
        .fold((0, 0), |(ayahs, pages), s| {
            (ayahs + s.ayah_count, pages + s.total_pages)
        })
}

/// Surah that follows `surah_id` in the curriculum
#[must_use]
pub fn next_in_curriculum(surah_id: u32) -> Option<&'static Surah> {
    match memorization_position(surah_id) {
        0 => None,
        position => surah_at_position(position + 1),
    }
}
