//! Static topic and section catalog.
//!
//! The learning content is fixed at build time. Topic keys are the identifiers
//! persisted in the completion sets, so renaming one orphans existing progress.

use serde::Serialize;

/// Number of topics used as the percentage denominator.
///
/// Kept separate from [`TOPICS`] on purpose: if the catalog grows or shrinks
/// this constant must be changed with it (a unit test enforces the match).
pub const TOTAL_TOPICS: usize = 12;

/// The history section; every topic in the catalog belongs to it.
pub const SECTION_SEJARAH: &str = "sejarah";

/// The law section.
pub const SECTION_HUKUM: &str = "hukum";

/// Section keys, in tab order.
pub const SECTIONS: [&str; 2] = [SECTION_SEJARAH, SECTION_HUKUM];

/// A leaf educational unit shown as a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Persisted identifier
    pub key: &'static str,

    /// Card and detail title
    pub title: &'static str,

    /// Section the card is rendered in
    pub section: &'static str,

    /// Detail body, plain text paragraphs separated by blank lines
    pub body: &'static str,
}

/// All topics in display order.
pub static TOPICS: [Topic; 12] = [
    Topic {
        key: "kelahiran",
        title: "Kelahiran Islam",
        section: SECTION_SEJARAH,
        body: "Islam lahir di Semenanjung Arab pada abad ke-7 Masehi, tepatnya tahun 610 M \
ketika Nabi Muhammad SAW menerima wahyu pertama di Gua Hira.\n\n\
Wahyu pertama adalah Surah Al-Alaq ayat 1-5: \"Bacalah dengan (menyebut) nama Tuhanmu \
yang menciptakan\".",
    },
    Topic {
        key: "nabi",
        title: "Nabi Muhammad SAW",
        section: SECTION_SEJARAH,
        body: "Muhammad bin Abdullah lahir di Makkah pada tahun 570 M dan dikenal sebagai \
Al-Amin (yang terpercaya) bahkan sebelum menjadi nabi.\n\n\
Sifat-sifat mulia: Shiddiq, Amanah, Tabligh, Fathonah.",
    },
    Topic {
        key: "hijrah",
        title: "Hijrah ke Madinah",
        section: SECTION_SEJARAH,
        body: "Hijrah adalah perpindahan Nabi Muhammad SAW dan para sahabat dari Makkah ke \
Madinah pada tahun 622 M.\n\n\
Hikmahnya antara lain persaudaraan Muhajirin dan Anshar, pembangunan Masjid Nabawi, \
dan Piagam Madinah.",
    },
    Topic {
        key: "perang",
        title: "Perang-perang Islam",
        section: SECTION_SEJARAH,
        body: "Selama periode Madinah umat Islam menghadapi Perang Badr (624 M), \
Perang Uhud (625 M), dan Perang Khandaq (627 M).",
    },
    Topic {
        key: "fathu",
        title: "Fathu Makkah",
        section: SECTION_SEJARAH,
        body: "Penaklukan Makkah pada tahun 8 H (630 M) berlangsung damai dan penuh hikmah.\n\n\
\"Pergilah kalian, kalian adalah orang-orang yang dibebaskan.\"",
    },
    Topic {
        key: "khalifah",
        title: "Khulafaur Rasyidin",
        section: SECTION_SEJARAH,
        body: "Empat khalifah pertama setelah wafatnya Nabi Muhammad SAW: Abu Bakar \
As-Shiddiq, Umar bin Khattab, Utsman bin Affan, dan Ali bin Abi Thalib (632-661 M).",
    },
    Topic {
        key: "umayyah",
        title: "Dinasti Umayyah",
        section: SECTION_SEJARAH,
        body: "Dinasti Islam pertama, didirikan oleh Muawiyah bin Abu Sufyan dengan ibu kota \
Damaskus. Wilayahnya membentang dari Spanyol hingga Asia Tengah.",
    },
    Topic {
        key: "abbasiyah",
        title: "Dinasti Abbasiyah",
        section: SECTION_SEJARAH,
        body: "Menggantikan Umayyah dengan ibu kota Baghdad; dikenal sebagai masa keemasan \
peradaban Islam (Al-Khawarizmi, Ar-Razi, Ibnu Sina, Al-Biruni).",
    },
    Topic {
        key: "penyebaran",
        title: "Penyebaran Islam",
        section: SECTION_SEJARAH,
        body: "Islam menyebar melalui perdagangan, dakwah, pernikahan, dan sikap toleran \
terhadap pemeluk agama lain.",
    },
    Topic {
        key: "nusantara",
        title: "Islam di Nusantara",
        section: SECTION_SEJARAH,
        body: "Islam masuk ke Nusantara secara damai dan bertahap sejak abad ke-7 M. \
Kerajaan Islam awal: Samudera Pasai, Kesultanan Malaka, dan Kesultanan Demak.",
    },
    Topic {
        key: "quran",
        title: "Al-Quran",
        section: SECTION_SEJARAH,
        body: "Kitab suci umat Islam yang diturunkan melalui malaikat Jibril AS selama \
23 tahun; terdiri atas 114 surah dan 6.236 ayat.",
    },
    Topic {
        key: "masjid",
        title: "Masjidil Haram dan Ka'bah",
        section: SECTION_SEJARAH,
        body: "Masjidil Haram di Makkah mengelilingi Ka'bah, kiblat umat Islam dan pusat \
ibadah haji.",
    },
];

/// Look up a topic by key.
pub fn topic(key: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.key == key)
}

/// Whether `key` names a topic in the catalog.
pub fn is_topic(key: &str) -> bool {
    topic(key).is_some()
}

/// Whether `key` names a section.
pub fn is_section(key: &str) -> bool {
    SECTIONS.contains(&key)
}
