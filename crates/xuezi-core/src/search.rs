//! Catalog filtering for the word list view.
//!
//! A record matches when the query is found in any of three fields:
//! - the headword, literally
//! - the primary meaning, case-insensitively
//! - the romanization, case-insensitively after folding (tone marks removed)
//!
//! Results always keep catalog order. There is no ranking.

use xuezi_types::WordRecord;

use crate::language::RomanizationFolder;

/// Which field produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Script,
    Meaning,
    Romanization,
}

pub struct SearchEngine<F> {
    folder: F,
}

/// Query forms computed once per filter call
struct PreparedQuery<'q> {
    raw: &'q str,
    lower: String,
    folded: String,
}

impl<F: RomanizationFolder> SearchEngine<F> {
    pub fn new(folder: F) -> Self {
        Self { folder }
    }

    pub fn folder(&self) -> &F {
        &self.folder
    }

    /// Subset of `catalog` matching `query`, in catalog order.
    /// An empty query returns every record.
    pub fn filter<'a>(&self, query: &str, catalog: &'a [WordRecord]) -> Vec<&'a WordRecord> {
        if query.is_empty() {
            return catalog.iter().collect();
        }

        let prepared = self.prepare(query);
        let results: Vec<&WordRecord> = catalog
            .iter()
            .filter(|record| self.match_field(&prepared, record).is_some())
            .collect();

        tracing::debug!(
            "Search '{}': {} of {} records",
            query,
            results.len(),
            catalog.len()
        );

        results
    }

    /// First field of `record` matched by `query`, if any
    pub fn matches(&self, query: &str, record: &WordRecord) -> Option<MatchField> {
        if query.is_empty() {
            return Some(MatchField::Script);
        }
        self.match_field(&self.prepare(query), record)
    }

    fn prepare<'q>(&self, query: &'q str) -> PreparedQuery<'q> {
        let lower = query.to_lowercase();
        let folded = self.folder.fold(&lower);
        PreparedQuery {
            raw: query,
            lower,
            folded,
        }
    }

    fn match_field(&self, query: &PreparedQuery<'_>, record: &WordRecord) -> Option<MatchField> {
        if record.script.contains(query.raw) {
            return Some(MatchField::Script);
        }

        if record.meaning_primary.to_lowercase().contains(&query.lower) {
            return Some(MatchField::Meaning);
        }

        let romanization = self.folder.fold(&record.romanization.to_lowercase());
        if romanization.contains(&query.folded) {
            return Some(MatchField::Romanization);
        }

        None
    }
}

/// Heading shown above the result list
pub fn results_heading(count: usize) -> String {
    if count == 0 {
        "No words found".to_string()
    } else {
        format!("Words ({count})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::IdentityFolder;
    use xuezi_types::HskLevel;

    fn word(id: &str, script: &str, romanization: &str, meaning: &str) -> WordRecord {
        WordRecord {
            id: id.into(),
            script: script.into(),
            romanization: romanization.into(),
            meaning_primary: meaning.into(),
            meaning_secondary: "утга".into(),
            level: HskLevel(1),
            pronunciation_ref: String::new(),
        }
    }

    fn catalog() -> Vec<WordRecord> {
        vec![
            word("1", "你好", "nihao", "hello"),
            word("2", "谢谢", "xiexie", "thank you"),
            word("3", "好吃", "haochi", "delicious"),
            word("4", "朋友", "pengyou", "friend"),
        ]
    }

    fn ids(results: &[&WordRecord]) -> Vec<String> {
        results.iter().map(|w| w.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let engine = SearchEngine::new(IdentityFolder);
        let words = catalog();
        let results = engine.filter("", &words);
        assert_eq!(ids(&results), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_script_match_keeps_catalog_order() {
        let engine = SearchEngine::new(IdentityFolder);
        let words = catalog();
        let results = engine.filter("好", &words);
        assert_eq!(ids(&results), vec!["1", "3"]);
    }

    #[test]
    fn test_meaning_match_ignores_case() {
        let engine = SearchEngine::new(IdentityFolder);
        let words = catalog();

        for query in ["thank", "THANK", "Thank You", "k y"] {
            let results = engine.filter(query, &words);
            assert_eq!(ids(&results), vec!["2"], "query {query:?}");
        }
    }

    #[test]
    fn test_secondary_meaning_is_not_searched() {
        let engine = SearchEngine::new(IdentityFolder);
        let words = catalog();
        assert!(engine.filter("утга", &words).is_empty());
    }

    #[test]
    fn test_romanization_match() {
        let engine = SearchEngine::new(IdentityFolder);
        let words = catalog();
        let results = engine.filter("hao", &words);
        assert_eq!(ids(&results), vec!["1", "3"]);
        assert_eq!(
            engine.matches("HAO", &words[0]),
            Some(MatchField::Romanization)
        );
    }

    #[test]
    fn test_results_are_subsequence_and_refilter_is_noop() {
        let engine = SearchEngine::new(IdentityFolder);
        let words = catalog();

        for query in ["", "好", "e", "i", "zzz", "o"] {
            let first: Vec<WordRecord> = engine.filter(query, &words).into_iter().cloned().collect();

            // subsequence check: positions strictly increase
            let positions: Vec<usize> = first
                .iter()
                .map(|w| words.iter().position(|c| c.id == w.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|p| p[0] < p[1]), "query {query:?}");

            let second: Vec<WordRecord> = engine.filter(query, &first).into_iter().cloned().collect();
            assert_eq!(first, second, "query {query:?}");
        }
    }

    #[test]
    fn test_no_match() {
        let engine = SearchEngine::new(IdentityFolder);
        let words = catalog();
        assert!(engine.filter("谢谢你们", &words).is_empty());
        assert_eq!(engine.matches("qqq", &words[0]), None);
    }

    #[test]
    fn test_results_heading() {
        assert_eq!(results_heading(0), "No words found");
        assert_eq!(results_heading(12), "Words (12)");
    }
}
