use clap::{Parser, Subcommand};
use xuezi_types::{AppEvent, StudyCommand};

#[derive(Debug, Parser)]
#[command(name = "xuezi", version, about = "HSK vocabulary lookup and stroke-order study")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every word, grouped by HSK level
    List {
        /// Only show this level
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=9))]
        level: Option<u8>,
    },

    /// Search by characters, pinyin (tone marks optional) or meaning
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show one word
    Show {
        id: String,

        /// Also play the pronunciation
        #[arg(long)]
        audio: bool,
    },

    /// Open a word and drive its stroke-order animations
    Study {
        id: String,

        /// Viewport width in pixels used for surface sizing
        #[arg(long)]
        width: Option<u32>,

        /// Animate every character in order
        #[arg(long)]
        play_all: bool,

        /// Animate character K (1-based)
        #[arg(long, value_name = "K", value_parser = clap::value_parser!(u32).range(1..))]
        animate: Option<u32>,

        /// Start stroke practice on character K (1-based)
        #[arg(long, value_name = "K", value_parser = clap::value_parser!(u32).range(1..))]
        practice: Option<u32>,

        /// Keep reading commands from stdin
        #[arg(short, long)]
        interactive: bool,
    },
}

impl Command {
    /// Events queued before the study loop starts reading input
    pub fn study_events(&self) -> Vec<AppEvent> {
        let Command::Study {
            id,
            width,
            play_all,
            animate,
            practice,
            ..
        } = self
        else {
            return vec![];
        };

        let mut events = Vec::new();
        if let Some(viewport_width) = width {
            events.push(AppEvent::Resize {
                viewport_width: *viewport_width,
            });
        }
        events.push(AppEvent::Open(id.clone()));
        if let Some(k) = animate {
            events.push(AppEvent::Study(StudyCommand::Animate(*k as usize - 1)));
        }
        if let Some(k) = practice {
            events.push(AppEvent::Study(StudyCommand::Practice(*k as usize - 1)));
        }
        if *play_all {
            events.push(AppEvent::Study(StudyCommand::PlayAll));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_flags_become_events() {
        let cli = Cli::try_parse_from([
            "xuezi", "study", "31", "--width", "480", "--animate", "2", "--play-all",
        ])
        .unwrap();

        let events = cli.command.study_events();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], AppEvent::Resize { viewport_width: 480 }));
        assert!(matches!(&events[1], AppEvent::Open(id) if id == "31"));
        assert!(matches!(events[2], AppEvent::Study(StudyCommand::Animate(1))));
        assert!(matches!(events[3], AppEvent::Study(StudyCommand::PlayAll)));
    }

    #[test]
    fn test_character_index_is_one_based() {
        assert!(Cli::try_parse_from(["xuezi", "study", "1", "--practice", "0"]).is_err());
    }

    #[test]
    fn test_search_joins_words() {
        let cli = Cli::try_parse_from(["xuezi", "search", "ni", "hao"]).unwrap();
        match cli.command {
            Command::Search { query } => assert_eq!(query.join(" "), "ni hao"),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
