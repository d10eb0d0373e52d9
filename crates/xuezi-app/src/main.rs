use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use xuezi_core::{AudioStatus, CatalogError};
use xuezi_io::HttpAudioPlayer;
use xuezi_lang_chinese::hsk;
use xuezi_types::HskLevel;

mod cli;
mod controller;
mod events;
mod input;
mod logging;
mod profile;
mod render;
mod state;
mod terminal;
mod ui;


use self::cli::{Cli, Command};
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let loaded = profile::load_config();
    logging::init_tracing(&loaded.config.log);
    loaded.source.log();

    let state = Arc::new(AppState::new(loaded.config));

    match &cli.command {
        Command::List { level } => {
            let words = state.catalog.entries();
            let lines = match *level {
                Some(level) => render::results(&hsk::at_level(words, HskLevel(level))),
                None => render::grouped(words),
            };
            print_lines(lines);
        }
        Command::Search { query } => {
            let query = query.join(" ");
            let words = state.search.filter(&query, state.catalog.entries());
            print_lines(render::results(&words));
        }
        Command::Show { id, audio } => show(&state, id, *audio).await?,
        Command::Study { interactive, .. } => {
            let initial = cli.command.study_events();
            let controller = AppController::new(state);

            let cancel = controller.cancel_token();
            tokio::spawn(async move {
                if signal::ctrl_c().await.is_ok() {
                    tracing::info!("Shutdown requested");
                    cancel.cancel();
                }
            });

            controller
                .run(initial, *interactive)
                .await
                .context("study loop failed")?;
        }
    }

    Ok(())
}

async fn show(state: &AppState, id: &str, play_audio: bool) -> anyhow::Result<()> {
    let word = match state.catalog.lookup(id) {
        Ok(word) => word,
        Err(CatalogError::NotFound(_)) => {
            print_lines(render::not_found(id));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    print_lines(render::detail(word));

    if play_audio {
        let audio = state.config.read().await.audio.clone();
        if !audio.enabled {
            println!("Audio is disabled");
            return Ok(());
        }
        let player = HttpAudioPlayer::new(&audio);
        let mut status = AudioStatus::new();
        match status.play_word(&player, word).await {
            Some(message) => println!("{message}"),
            None => println!("Played {}", word.romanization),
        }
    }
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
