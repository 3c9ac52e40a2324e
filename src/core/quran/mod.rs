//! Quran reference data and curriculum ordering

pub mod order;
pub mod surah;

pub use order::{
    curriculum, memorization_position, next_in_curriculum, surah_at_position,
    surah_id_at_position,
};
pub use surah::{
    ayah_options, find_surah, find_surah_by_name, resolve_surah, surah_id_from_name,
    surah_name_from_id, Surah, SURAHS, SURAH_COUNT, TOTAL_AYAHS, TOTAL_QURAN_PAGES,
};
