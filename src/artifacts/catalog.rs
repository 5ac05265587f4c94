//! Multibyte name catalog
//!
//! The catalog is the single source for both the files written to the volume
//! and the `filenames[]` array in `files.h`. Entries are used verbatim as file
//! names and as file contents, so each one must be a legal FAT long name:
//! no path separators, no `* ? : " < > |`, no control characters, and at most
//! 255 characters.
//!
//! The order matters to the consumer. The downstream test walks the root
//! directory of the image and compares entry N against `filenames[N]`, so
//! files are created in catalog order.

/// Longest long file name FAT accepts, counted in characters
pub const MAX_NAME_CHARS: usize = 255;

/// Names written to the volume, in creation order
///
/// Besides the scripts covered, a few entries target specific corners of the
/// long name handling: a plain 8.3 name, a name FAT stores with its trailing
/// dot stripped, a character outside the Basic Multilingual Plane (a UTF-16
/// surrogate pair in the directory entry) and one name of exactly
/// [`MAX_NAME_CHARS`] characters.
pub const CATALOG: &[&str] = &[
    "shrtname",
    "ÄÖÜ äöü ß",
    "€ sign and © symbol",
    "đây là một tên tập tin dài",
    "Bu uzun bir dosya adı",
    "هذا هو اسم ملف طويل",
    "זהו שם קובץ ארוך",
    "αυτό είναι ένα μεγάλο όνομα αρχείου",
    "это длинное имя",
    "гэта доўгае імя",
    "това е дълго име на файла",
    "यह एक लंबा फ़ाइल नाम है",
    "这是一个长文件名",
    "これは長いファイル名です",
    "이것은 긴 파일 이름입니다",
    "MixedCase Ümlaut.txt",
    "Datei mit Punkt.",
    "emoji 😀 outside the BMP",
    "Ünïcödé_ñämé.dat",
    concat!(
        "This file name has 255 characters, the limit for FAT long names. ",
        "Every number ends on the position it names, ",
        "xxxxxxxx120xxxxxxx130xxxxxxx140xxxxxxx150xxxxxxx160xxxxxxx170",
        "xxxxxxx180xxxxxxx190xxxxxxx200xxxxxxx210xxxxxxx220xxxxxxx230",
        "xxxxxxx240xxxxxxx250xxxxx"
    ),
];

/// Characters FAT refuses in a long file name, besides control characters
const ILLEGAL_NAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Number of characters in a name, the unit FAT limits long names by
pub fn name_chars(name: &str) -> usize {
    name.chars().count()
}

/// The catalog entry with the most characters
pub fn longest_entry() -> &'static str {
    CATALOG
        .iter()
        .copied()
        .max_by_key(|name| name_chars(name))
        .unwrap_or_default()
}

/// Whether `name` could be used as a FAT long file name as-is
pub fn is_portable_name(name: &str) -> bool {
    !name.is_empty()
        && name_chars(name) <= MAX_NAME_CHARS
        && name != "."
        && name != ".."
        && !name
            .chars()
            .any(|c| c.is_control() || ILLEGAL_NAME_CHARS.contains(&c))
}
