use std::path::Path;

use serde::Deserialize;
use xuezi_core::catalog::{Catalog, CatalogError, CatalogLoader};
use xuezi_types::{HskLevel, WordRecord};

// JSON structures of the word list format
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordJson {
    id: String,
    hanzi: String,
    pinyin: String,
    hsk_level: u8,
    meaning_en: String,
    #[serde(default)]
    meaning_mn: String,
    #[serde(default)]
    audio_url: String,
}

impl From<WordJson> for WordRecord {
    fn from(json: WordJson) -> Self {
        WordRecord {
            id: json.id,
            script: json.hanzi,
            romanization: json.pinyin,
            meaning_primary: json.meaning_en,
            meaning_secondary: json.meaning_mn,
            level: HskLevel(json.hsk_level),
            pronunciation_ref: json.audio_url,
        }
    }
}

/// Loads HSK word lists stored as a JSON array
pub struct JsonCatalogLoader;

impl JsonCatalogLoader {
    /// Load the word list compiled into the binary
    pub fn load_embedded() -> Result<Catalog, CatalogError> {
        let json = include_str!("../data/words.json");
        tracing::info!("Loading embedded word list...");
        let catalog = JsonCatalogLoader.load_from_str(json)?;
        tracing::info!("Loaded {} words", catalog.len());
        Ok(catalog)
    }

    /// Embedded list (optional) merged with extra files in order.
    /// Files that fail to load are logged and skipped.
    pub fn load_with_additional(embedded: bool, additional_paths: &[String]) -> Catalog {
        let mut catalog = if embedded {
            Self::load_embedded().unwrap_or_else(|e| {
                tracing::error!("Failed to load embedded word list: {}", e);
                tracing::warn!("Starting with empty catalog");
                Catalog::new()
            })
        } else {
            Catalog::new()
        };

        for path in additional_paths {
            match JsonCatalogLoader.load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging {} words from: {}", additional.len(), path);
                    catalog = catalog.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load word list from {}: {}", path, e);
                }
            }
        }

        catalog
    }
}

impl CatalogLoader for JsonCatalogLoader {
    fn load_from_str(&self, data: &str) -> Result<Catalog, CatalogError> {
        let words: Vec<WordJson> =
            serde_json::from_str(data).map_err(|e| CatalogError::Parse(e.to_string()))?;

        for word in &words {
            if !(HskLevel::MIN..=HskLevel::MAX).contains(&word.hsk_level) {
                return Err(CatalogError::Parse(format!(
                    "word {} has invalid HSK level {}",
                    word.id, word.hsk_level
                )));
            }
        }

        Catalog::from_records(words.into_iter().map(WordRecord::from).collect())
    }

    fn supported_formats(&self) -> Vec<String> {
        vec!["json".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = JsonCatalogLoader::load_embedded().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.entries().iter().all(|w| !w.script.is_empty()));

        let hello = catalog.get_by_id("1").unwrap();
        assert_eq!(hello.script, "你好");
        assert_eq!(hello.romanization, "nǐ hǎo");
    }

    #[test]
    fn test_load_from_str_maps_fields() {
        let json = r#"[
            { "id": "x1", "hanzi": "猫", "pinyin": "māo", "hskLevel": 1,
              "meaningEn": "cat", "meaningMn": "муур", "audioUrl": "https://cdn.example.com/audio/mao1.mp3" }
        ]"#;
        let catalog = JsonCatalogLoader.load_from_str(json).unwrap();
        let cat = catalog.get_by_id("x1").unwrap();

        assert_eq!(cat.script, "猫");
        assert_eq!(cat.meaning_secondary, "муур");
        assert_eq!(cat.level, HskLevel(1));
        assert_eq!(cat.pronunciation_ref, "https://cdn.example.com/audio/mao1.mp3");
    }

    #[test]
    fn test_invalid_input_is_reported() {
        let bad_json = JsonCatalogLoader.load_from_str("{ not json");
        assert!(matches!(bad_json, Err(CatalogError::Parse(_))));

        let bad_level = JsonCatalogLoader.load_from_str(
            r#"[{ "id": "1", "hanzi": "猫", "pinyin": "māo", "hskLevel": 0, "meaningEn": "cat" }]"#,
        );
        assert!(matches!(bad_level, Err(CatalogError::Parse(_))));

        let empty_hanzi = JsonCatalogLoader.load_from_str(
            r#"[{ "id": "1", "hanzi": "", "pinyin": "", "hskLevel": 1, "meaningEn": "nothing" }]"#,
        );
        assert!(matches!(empty_hanzi, Err(CatalogError::EmptyScript(_))));
    }

    #[test]
    fn test_missing_additional_file_is_skipped() {
        let paths = vec!["/definitely/not/here.json".to_string()];
        let catalog = JsonCatalogLoader::load_with_additional(true, &paths);
        let embedded = JsonCatalogLoader::load_embedded().unwrap();
        assert_eq!(catalog.len(), embedded.len());

        let empty = JsonCatalogLoader::load_with_additional(false, &paths);
        assert!(empty.is_empty());
    }
}
