use unicode_normalization::UnicodeNormalization;
use xuezi_core::language::RomanizationFolder;

use crate::tones::{base_letter, is_combining_tone_mark};

/// Strips pinyin tone marks for search comparison
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinFolder;

impl PinyinFolder {
    pub fn new() -> Self {
        Self
    }
}

impl RomanizationFolder for PinyinFolder {
    fn language_code(&self) -> &str {
        "zh"
    }

    fn fold(&self, text: &str) -> String {
        strip_tone_marks(text)
    }
}

/// Replace each tone-marked letter with its base letter.
/// Input is NFC-composed first so `a` + U+0304 folds like `ā`.
/// Characters outside the table pass through unchanged.
pub fn strip_tone_marks(text: &str) -> String {
    text.nfc()
        .filter(|c| !is_combining_tone_mark(*c))
        .map(|c| base_letter(c).unwrap_or(c))
        .collect()
}
