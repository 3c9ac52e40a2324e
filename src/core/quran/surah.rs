//! Surah reference table
//!
//! The 114 surahs in canonical order, each carrying its place in the
//! memorization curriculum. Page spans refer to the 604-page Madani print.

use serde::Serialize;

/// Number of surahs in the Quran
pub const SURAH_COUNT: usize = 114;

/// Number of pages in the reference print edition
pub const TOTAL_QURAN_PAGES: u32 = 604;

/// A single surah in the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    /// Canonical id (1 = Al-Fatihah, 114 = An-Nas)
    pub id: u32,
    /// Position in the memorization curriculum (1 = taught first)
    pub memorization_order: u32,
    /// Arabic display name
    pub name: &'static str,
    /// Latin transliteration of the name
    pub english_name: &'static str,
    /// Number of ayahs
    pub ayah_count: u32,
    /// First page of the surah (inclusive)
    pub start_page: u32,
    /// Last page of the surah (inclusive)
    pub end_page: u32,
    /// Pages attributed to the surah. Boundary pages shared with a
    /// neighbouring surah may be counted by both.
    pub total_pages: u32,
}

impl Surah {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        id: u32,
        memorization_order: u32,
        name: &'static str,
        english_name: &'static str,
        ayah_count: u32,
        start_page: u32,
        end_page: u32,
        total_pages: u32,
    ) -> Self {
        Self {
            id,
            memorization_order,
            name,
            english_name,
            ayah_count,
            start_page,
            end_page,
            total_pages,
        }
    }

    /// Number of print pages between `start_page` and `end_page`, inclusive
    #[must_use]
    pub const fn page_span(&self) -> u32 {
        self.end_page - self.start_page + 1
    }

    /// Whether `ayah` is a valid ayah number for this surah
    #[must_use]
    pub const fn contains_ayah(&self, ayah: u32) -> bool {
        ayah >= 1 && ayah <= self.ayah_count
    }
}

pub(super) const SURAH_TABLE: [Surah; SURAH_COUNT] = [
    Surah::new(1, 1, "الفاتحة", "Al-Fatihah", 7, 1, 1, 1),
    Surah::new(2, 114, "البقرة", "Al-Baqarah", 286, 2, 50, 48),
    Surah::new(3, 113, "آل عمران", "Aal-Imran", 200, 50, 77, 27),
    Surah::new(4, 112, "النساء", "An-Nisa", 176, 77, 106, 29),
    Surah::new(5, 111, "المائدة", "Al-Maidah", 120, 106, 128, 22),
    Surah::new(6, 110, "الأنعام", "Al-Anam", 165, 128, 151, 23),
    Surah::new(7, 109, "الأعراف", "Al-Araf", 206, 151, 176, 25),
    Surah::new(8, 108, "الأنفال", "Al-Anfal", 75, 176, 187, 11),
    Surah::new(9, 107, "التوبة", "At-Tawbah", 129, 187, 208, 21),
    Surah::new(10, 106, "يونس", "Yunus", 109, 208, 221, 13),
    Surah::new(11, 105, "هود", "Hud", 123, 221, 235, 14),
    Surah::new(12, 104, "يوسف", "Yusuf", 111, 235, 249, 14),
    Surah::new(13, 103, "الرعد", "Ar-Rad", 43, 249, 255, 6),
    Surah::new(14, 102, "إبراهيم", "Ibrahim", 52, 255, 262, 7),
    Surah::new(15, 101, "الحجر", "Al-Hijr", 99, 262, 267, 5),
    Surah::new(16, 100, "النحل", "An-Nahl", 128, 267, 282, 15),
    Surah::new(17, 99, "الإسراء", "Al-Isra", 111, 282, 293, 11),
    Surah::new(18, 98, "الكهف", "Al-Kahf", 110, 293, 305, 12),
    Surah::new(19, 97, "مريم", "Maryam", 98, 305, 312, 7),
    Surah::new(20, 96, "طه", "Taha", 135, 312, 322, 10),
    Surah::new(21, 95, "الأنبياء", "Al-Anbiya", 112, 322, 332, 10),
    Surah::new(22, 94, "الحج", "Al-Hajj", 78, 332, 342, 10),
    Surah::new(23, 93, "المؤمنون", "Al-Muminun", 118, 342, 350, 8),
    Surah::new(24, 92, "النور", "An-Nur", 64, 350, 359, 9),
    Surah::new(25, 91, "الفرقان", "Al-Furqan", 77, 359, 367, 8),
    Surah::new(26, 90, "الشعراء", "Ash-Shuara", 227, 367, 377, 10),
    Surah::new(27, 89, "النمل", "An-Naml", 93, 377, 385, 8),
    Surah::new(28, 88, "القصص", "Al-Qasas", 88, 385, 396, 11),
    Surah::new(29, 87, "العنكبوت", "Al-Ankabut", 69, 396, 404, 8),
    Surah::new(30, 86, "الروم", "Ar-Rum", 60, 404, 411, 7),
    Surah::new(31, 85, "لقمان", "Luqman", 34, 411, 415, 4),
    Surah::new(32, 84, "السجدة", "As-Sajdah", 30, 415, 418, 3),
    Surah::new(33, 83, "الأحزاب", "Al-Ahzab", 73, 418, 428, 10),
    Surah::new(34, 82, "سبأ", "Saba", 54, 428, 434, 6),
    Surah::new(35, 81, "فاطر", "Fatir", 45, 434, 440, 6),
    Surah::new(36, 80, "يس", "Ya-Sin", 83, 440, 446, 6),
    Surah::new(37, 79, "الصافات", "As-Saffat", 182, 446, 453, 7),
    Surah::new(38, 78, "ص", "Sad", 88, 453, 458, 5),
    Surah::new(39, 77, "الزمر", "Az-Zumar", 75, 458, 467, 9),
    Surah::new(40, 76, "غافر", "Ghafir", 85, 467, 477, 10),
    Surah::new(41, 75, "فصلت", "Fussilat", 54, 477, 483, 6),
    Surah::new(42, 74, "الشورى", "Ash-Shura", 53, 483, 489, 6),
    Surah::new(43, 73, "الزخرف", "Az-Zukhruf", 89, 489, 496, 7),
    Surah::new(44, 72, "الدخان", "Ad-Dukhan", 59, 496, 499, 3),
    Surah::new(45, 71, "الجاثية", "Al-Jathiyah", 37, 499, 502, 3),
    Surah::new(46, 70, "الأحقاف", "Al-Ahqaf", 35, 502, 507, 5),
    Surah::new(47, 69, "محمد", "Muhammad", 38, 507, 511, 4),
    Surah::new(48, 68, "الفتح", "Al-Fath", 29, 511, 515, 4),
    Surah::new(49, 67, "الحجرات", "Al-Hujurat", 18, 515, 518, 3),
    Surah::new(50, 66, "ق", "Qaf", 45, 518, 520, 2),
    Surah::new(51, 65, "الذاريات", "Adh-Dhariyat", 60, 520, 523, 3),
    Surah::new(52, 64, "الطور", "At-Tur", 49, 523, 526, 3),
    Surah::new(53, 63, "النجم", "An-Najm", 62, 526, 528, 2),
    Surah::new(54, 62, "القمر", "Al-Qamar", 55, 528, 531, 3),
    Surah::new(55, 61, "الرحمن", "Ar-Rahman", 78, 531, 534, 3),
    Surah::new(56, 60, "الواقعة", "Al-Waqiah", 96, 534, 537, 3),
    Surah::new(57, 59, "الحديد", "Al-Hadid", 29, 537, 542, 5),
    Surah::new(58, 58, "المجادلة", "Al-Mujadilah", 22, 542, 545, 3),
    Surah::new(59, 57, "الحشر", "Al-Hashr", 24, 545, 549, 4),
    Surah::new(60, 56, "الممتحنة", "Al-Mumtahanah", 13, 549, 551, 2),
    Surah::new(61, 55, "الصف", "As-Saff", 14, 551, 553, 2),
    Surah::new(62, 54, "الجمعة", "Al-Jumuah", 11, 553, 554, 1),
    Surah::new(63, 53, "المنافقون", "Al-Munafiqun", 11, 554, 556, 2),
    Surah::new(64, 52, "التغابن", "At-Taghabun", 18, 556, 558, 2),
    Surah::new(65, 51, "الطلاق", "At-Talaq", 12, 558, 560, 2),
    Surah::new(66, 50, "التحريم", "At-Tahrim", 12, 560, 562, 2),
    Surah::new(67, 49, "الملك", "Al-Mulk", 30, 562, 564, 2),
    Surah::new(68, 48, "القلم", "Al-Qalam", 52, 564, 566, 2),
    Surah::new(69, 47, "الحاقة", "Al-Haqqah", 52, 566, 568, 2),
    Surah::new(70, 46, "المعارج", "Al-Maarij", 44, 568, 570, 2),
    Surah::new(71, 45, "نوح", "Nuh", 28, 570, 573, 3),
    Surah::new(72, 44, "الجن", "Al-Jinn", 28, 572, 574, 2),
    Surah::new(73, 43, "المزمل", "Al-Muzzammil", 20, 574, 575, 1),
    Surah::new(74, 42, "المدثر", "Al-Muddaththir", 56, 575, 577, 2),
    Surah::new(75, 41, "القيامة", "Al-Qiyamah", 40, 577, 578, 1),
    Surah::new(76, 40, "الإنسان", "Al-Insan", 31, 578, 580, 2),
    Surah::new(77, 39, "المرسلات", "Al-Mursalat", 50, 580, 582, 2),
    Surah::new(78, 38, "النبأ", "An-Naba", 40, 582, 583, 1),
    Surah::new(79, 37, "النازعات", "An-Naziat", 46, 583, 585, 2),
    Surah::new(80, 36, "عبس", "Abasa", 42, 585, 586, 1),
    Surah::new(81, 35, "التكوير", "At-Takwir", 29, 586, 587, 1),
    Surah::new(82, 34, "الانفطار", "Al-Infitar", 19, 587, 587, 1),
    Surah::new(83, 33, "المطففين", "Al-Mutaffifin", 36, 587, 589, 2),
    Surah::new(84, 32, "الانشقاق", "Al-Inshiqaq", 25, 589, 590, 1),
    Surah::new(85, 31, "البروج", "Al-Buruj", 22, 590, 590, 1),
    Surah::new(86, 30, "الطارق", "At-Tariq", 17, 591, 591, 1),
    Surah::new(87, 29, "الأعلى", "Al-Ala", 19, 591, 592, 1),
    Surah::new(88, 28, "الغاشية", "Al-Ghashiyah", 26, 592, 592, 1),
    Surah::new(89, 27, "الفجر", "Al-Fajr", 30, 593, 594, 2),
    Surah::new(90, 26, "البلد", "Al-Balad", 20, 594, 594, 1),
    Surah::new(91, 25, "الشمس", "Ash-Shams", 15, 595, 595, 1),
    Surah::new(92, 24, "الليل", "Al-Layl", 21, 595, 596, 1),
    Surah::new(93, 23, "الضحى", "Ad-Duha", 11, 596, 596, 1),
    Surah::new(94, 22, "الشرح", "Ash-Sharh", 8, 596, 596, 1),
    Surah::new(95, 21, "التين", "At-Tin", 8, 597, 597, 1),
    Surah::new(96, 20, "العلق", "Al-Alaq", 19, 597, 597, 1),
    Surah::new(97, 19, "القدر", "Al-Qadr", 5, 598, 598, 1),
    Surah::new(98, 18, "البينة", "Al-Bayyinah", 8, 598, 599, 1),
    Surah::new(99, 17, "الزلزلة", "Az-Zalzalah", 8, 599, 599, 1),
    Surah::new(100, 16, "العاديات", "Al-Adiyat", 11, 599, 600, 1),
    Surah::new(101, 15, "القارعة", "Al-Qariah", 11, 600, 600, 1),
    Surah::new(102, 14, "التكاثر", "At-Takathur", 8, 600, 601, 1),
    Surah::new(103, 13, "العصر", "Al-Asr", 3, 601, 601, 1),
    Surah::new(104, 12, "الهمزة", "Al-Humazah", 9, 601, 601, 1),
    Surah::new(105, 11, "الفيل", "Al-Fil", 5, 601, 602, 1),
    Surah::new(106, 10, "قريش", "Quraysh", 4, 602, 602, 1),
    Surah::new(107, 9, "الماعون", "Al-Maun", 7, 602, 602, 1),
    Surah::new(108, 8, "الكوثر", "Al-Kawthar", 3, 602, 602, 1),
    Surah::new(109, 7, "الكافرون", "Al-Kafirun", 6, 603, 603, 1),
    Surah::new(110, 6, "النصر", "An-Nasr", 3, 603, 603, 1),
    Surah::new(111, 5, "المسد", "Al-Masad", 5, 603, 603, 1),
    Surah::new(112, 4, "الإخلاص", "Al-Ikhlas", 4, 604, 604, 1),
    Surah::new(113, 3, "الفلق", "Al-Falaq", 5, 604, 604, 1),
    Surah::new(114, 2, "الناس", "An-Nas", 6, 604, 604, 1),
];

/// The reference table, indexed by `id - 1`
pub static SURAHS: [Surah; SURAH_COUNT] = SURAH_TABLE;

/// Total ayahs across all surahs
pub const TOTAL_AYAHS: u32 = sum_ayahs();

const fn sum_ayahs() -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < SURAH_COUNT {
        total += SURAH_TABLE[i].ayah_count;
        i += 1;
    }
    total
}

/// Look up a surah by canonical id
#[must_use]
pub fn find_surah(id: u32) -> Option<&'static Surah> {
    let index = usize::try_from(id).ok()?.checked_sub(1)?;
    SURAHS.get(index)
}

/// Look up a surah by name
///
/// Matches the Arabic name exactly, or the English transliteration
/// case-insensitively.
#[must_use]
pub fn find_surah_by_name(name: &str) -> Option<&'static Surah> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    SURAHS
        .iter()
        .find(|s| s.name == name || s.english_name.eq_ignore_ascii_case(name))
}

/// Resolve a user-supplied surah reference: a canonical id or a name
#[must_use]
pub fn resolve_surah(reference: &str) -> Option<&'static Surah> {
    reference
        .trim()
        .parse::<u32>()
        .map_or_else(|_| find_surah_by_name(reference), find_surah)
}

/// Arabic name for a surah id, or `""` if the id is unknown
#[must_use]
pub fn surah_name_from_id(id: u32) -> &'static str {
    find_surah(id).map_or("", |s| s.name)
}

/// Surah id for a name, or `0` if no surah matches
#[must_use]
pub fn surah_id_from_name(name: &str) -> u32 {
    find_surah_by_name(name).map_or(0, |s| s.id)
}

/// Valid ayah numbers for a surah; empty for an unknown id
#[must_use]
pub fn ayah_options(surah_id: u32) -> std::ops::RangeInclusive<u32> {
    // 1..=0 is the canonical empty inclusive range
    find_surah(surah_id).map_or(1..=0, |s| 1..=s.ayah_count)
}
