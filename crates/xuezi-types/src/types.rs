use serde::{Deserialize, Serialize};

/// One catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: String,
    /// Headword, one or more Hanzi
    pub script: String,
    /// Tone-marked pinyin
    pub romanization: String,
    /// English gloss
    pub meaning_primary: String,
    /// Mongolian gloss
    pub meaning_secondary: String,
    pub level: HskLevel,
    pub pronunciation_ref: String,
}

impl WordRecord {
    /// Headword split into its characters, in order
    pub fn characters(&self) -> Vec<char> {
        self.script.chars().collect()
    }

    pub fn char_count(&self) -> usize {
        self.script.chars().count()
    }
}

/// HSK proficiency tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HskLevel(pub u8);

impl HskLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    /// Parse from "3", "HSK3" or "hsk 3"
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s
            .strip_prefix("HSK")
            .or_else(|| s.strip_prefix("hsk"))
            .unwrap_or(s)
            .trim();

        digits
            .parse::<u8>()
            .ok()
            .filter(|n| (Self::MIN..=Self::MAX).contains(n))
            .map(HskLevel)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// "HSK 3"
    pub fn label(&self) -> String {
        format!("HSK {}", self.0)
    }

    pub fn description(&self) -> &'static str {
        match self.0 {
            1 | 2 => "Beginner",
            3 | 4 => "Elementary",
            5 | 6 => "Intermediate",
            _ => "Advanced",
        }
    }
}

impl std::fmt::Display for HskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level {}", self.0)
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Query typed into the list view
    Search(String),
    /// Navigate to a word's detail view by id
    Open(String),
    /// Back to the list view
    Back,
    Resize { viewport_width: u32 },
    Study(StudyCommand),
    PlayAudio,
    Quit,
}

/// Actions available on the detail view of the open word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyCommand {
    Animate(usize),
    Practice(usize),
    PlayAll,
    FocusNext,
    FocusPrev,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(script: &str) -> WordRecord {
        WordRecord {
            id: "1".into(),
            script: script.into(),
            romanization: "nǐ hǎo".into(),
            meaning_primary: "hello".into(),
            meaning_secondary: "сайн байна уу".into(),
            level: HskLevel(1),
            pronunciation_ref: "https://example.com/nihao.mp3".into(),
        }
    }

    #[test]
    fn test_characters_split_by_char_not_byte() {
        let r = record("你好");
        assert_eq!(r.characters(), vec!['你', '好']);
        assert_eq!(r.char_count(), 2);
    }

    #[test]
    fn test_hsk_level_parse() {
        assert_eq!(HskLevel::parse("3"), Some(HskLevel(3)));
        assert_eq!(HskLevel::parse("HSK4"), Some(HskLevel(4)));
        assert_eq!(HskLevel::parse("hsk 2"), Some(HskLevel(2)));
        assert_eq!(HskLevel::parse("0"), None);
        assert_eq!(HskLevel::parse("N5"), None);
    }

    #[test]
    fn test_hsk_level_is_transparent_in_json() {
        let json = serde_json::to_string(&HskLevel(5)).unwrap();
        assert_eq!(json, "5");
        assert_eq!(HskLevel(5).label(), "HSK 5");
        assert_eq!(HskLevel(5).to_string(), "Level 5");
    }
}
