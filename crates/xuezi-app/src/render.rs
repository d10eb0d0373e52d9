//! Plain-text views written to stdout

use xuezi_core::results_heading;
use xuezi_lang_chinese::hsk;
use xuezi_session::{StudySession, SurfaceProvider};
use xuezi_types::WordRecord;

pub fn word_row(word: &WordRecord) -> String {
    format!(
        "{:>4}  {}  {}  {}  [{}]",
        word.id,
        word.script,
        word.romanization,
        word.meaning_primary,
        word.level.label()
    )
}

/// Heading followed by one row per word
pub fn results(words: &[&WordRecord]) -> Vec<String> {
    let mut lines = vec![results_heading(words.len())];
    lines.extend(words.iter().map(|w| word_row(w)));
    lines
}

/// Every word grouped under its HSK level
pub fn grouped<'a, I>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a WordRecord>,
{
    let mut lines = Vec::new();
    for (level, group) in hsk::group_by_level(words) {
        lines.push(format!(
            "{} · {} ({})",
            hsk::badge(level),
            level.description(),
            group.len()
        ));
        lines.extend(group.iter().map(|w| word_row(w)));
    }
    if lines.is_empty() {
        lines.push(results_heading(0));
    }
    lines
}

pub fn detail(word: &WordRecord) -> Vec<String> {
    let mut lines = vec![
        word.script.clone(),
        word.romanization.clone(),
        word.meaning_primary.clone(),
    ];
    if !word.meaning_secondary.is_empty() {
        lines.push(word.meaning_secondary.clone());
    }
    lines.push(format!("{} · {}", word.level.label(), word.level.description()));
    lines
}

pub fn not_found(id: &str) -> Vec<String> {
    vec![
        "Word not found".to_string(),
        format!("No word with id {id}. Type `back` to return to the word list."),
    ]
}

/// One line for the character strip. The active character is bracketed,
/// characters without a surface are crossed out.
pub fn session_line<P: SurfaceProvider>(session: &StudySession<P>) -> String {
    let active = session.active_character_index();
    let cells: Vec<String> = session
        .characters()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if !session.is_available(i) {
                "✗".to_string()
            } else if active == Some(i) {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect();

    let mut line = cells.join(" ");
    if session.is_playing_all() {
        line.push_str("  (playing all)");
    }
    line
}

/// Failure notes for characters whose surface could not be created
pub fn failures<P: SurfaceProvider>(session: &StudySession<P>) -> Vec<String> {
    (0..session.characters().len())
        .filter_map(|i| session.failure_message(i))
        .collect()
}
