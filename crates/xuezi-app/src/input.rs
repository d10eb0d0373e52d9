use std::io::BufRead;

use kanal::Sender;
use xuezi_types::{AppEvent, StudyCommand};

pub const HELP: &str = "commands: search <q> | open <id> | back | animate <k> | practice <k> | \
all | next | prev | width <px> | audio | quit";

/// Parse one line typed at the prompt. Character numbers are 1-based.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let event = match verb.to_lowercase().as_str() {
        "q" | "quit" | "exit" => AppEvent::Quit,
        "b" | "back" => AppEvent::Back,
        "s" | "search" => AppEvent::Search(rest.to_string()),
        "o" | "open" if !rest.is_empty() => AppEvent::Open(rest.to_string()),
        "a" | "animate" => AppEvent::Study(StudyCommand::Animate(character(rest)?)),
        "p" | "practice" => AppEvent::Study(StudyCommand::Practice(character(rest)?)),
        "all" | "play" => AppEvent::Study(StudyCommand::PlayAll),
        "n" | "next" => AppEvent::Study(StudyCommand::FocusNext),
        "prev" => AppEvent::Study(StudyCommand::FocusPrev),
        "w" | "width" => AppEvent::Resize {
            viewport_width: rest.parse().ok()?,
        },
        "audio" | "listen" => AppEvent::PlayAudio,
        _ => return None,
    };
    Some(event)
}

fn character(arg: &str) -> Option<usize> {
    arg.parse::<usize>().ok()?.checked_sub(1)
}

/// Read stdin on a plain thread and forward parsed commands.
/// Sends `Quit` at end of input.
pub fn spawn_stdin_reader(tx: Sender<AppEvent>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Some(event) => {
                    if tx.send(event).is_err() {
                        return;
                    }
                }
                None => {
                    tracing::warn!("Unknown command: {}", line.trim());
                    eprintln!("{HELP}");
                }
            }
        }
        let _ = tx.send(AppEvent::Quit);
    });
}
