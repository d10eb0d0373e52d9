use std::collections::BTreeMap;

use xuezi_types::{HskLevel, WordRecord};

/// Catalog entries grouped by HSK tier, each group in catalog order
pub fn group_by_level<'a, I>(words: I) -> BTreeMap<HskLevel, Vec<&'a WordRecord>>
where
    I: IntoIterator<Item = &'a WordRecord>,
{
    let mut groups: BTreeMap<HskLevel, Vec<&WordRecord>> = BTreeMap::new();
    for word in words {
        groups.entry(word.level).or_default().push(word);
    }
    groups
}

/// Words at exactly `level`
pub fn at_level<'a, I>(words: I, level: HskLevel) -> Vec<&'a WordRecord>
where
    I: IntoIterator<Item = &'a WordRecord>,
{
    words.into_iter().filter(|w| w.level == level).collect()
}

/// Colored badge for list rows
pub fn badge(level: HskLevel) -> String {
    let dot = match level.value() {
        1 | 2 => "🟢",
        3 | 4 => "🟡",
        5 | 6 => "🟠",
        _ => "🔴",
    };
    format!("{dot} {}", level.label())
}
