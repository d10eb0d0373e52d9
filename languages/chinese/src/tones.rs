//! Pinyin tone-mark table.
//!
//! Maps every tone-decorated letter used in Hanyu Pinyin to its undecorated
//! base letter. The ü family folds to `v`, the usual keyboard spelling.

/// (decorated, base) pairs
pub const TONE_MARKS: &[(char, char)] = &[
    ('ā', 'a'),
    ('á', 'a'),
    ('ǎ', 'a'),
    ('à', 'a'),
    ('ē', 'e'),
    ('é', 'e'),
    ('ě', 'e'),
    ('è', 'e'),
    ('ê', 'e'),
    ('ế', 'e'),
    ('ề', 'e'),
    ('ī', 'i'),
    ('í', 'i'),
    ('ǐ', 'i'),
    ('ì', 'i'),
    ('ō', 'o'),
    ('ó', 'o'),
    ('ǒ', 'o'),
    ('ò', 'o'),
    ('ū', 'u'),
    ('ú', 'u'),
    ('ǔ', 'u'),
    ('ù', 'u'),
    ('ü', 'v'),
    ('ǖ', 'v'),
    ('ǘ', 'v'),
    ('ǚ', 'v'),
    ('ǜ', 'v'),
    ('ń', 'n'),
    ('ň', 'n'),
    ('ǹ', 'n'),
];

/// Combining marks left over when no precomposed letter exists (ê̄, ê̌, m̄ ...)
pub const COMBINING_TONE_MARKS: &[char] = &[
    '\u{0300}', // grave, 4th tone
    '\u{0301}', // acute, 2nd tone
    '\u{0304}', // macron, 1st tone
    '\u{030C}', // caron, 3rd tone
];

/// Base letter for a decorated one, `None` when `c` carries no tone mark
pub fn base_letter(c: char) -> Option<char> {
    TONE_MARKS
        .iter()
        .find(|(decorated, _)| *decorated == c)
        .map(|(_, base)| *base)
}

pub fn is_combining_tone_mark(c: char) -> bool {
    COMBINING_TONE_MARKS.contains(&c)
}
