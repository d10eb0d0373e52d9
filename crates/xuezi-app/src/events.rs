use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use xuezi_core::{AudioPlayer, AudioStatus};
use xuezi_session::{StudySession, SurfaceProvider};
use xuezi_types::{AppEvent, WordRecord};

use crate::render;
use crate::state::AppState;

pub mod audio;
pub mod browse;
pub mod open;
pub mod study;

use audio::handle_play_audio;
use browse::{handle_back, handle_search};
use open::handle_open;
use study::{handle_resize, handle_study};

/// What the event loop is currently showing
pub struct Screen<P: SurfaceProvider> {
    pub open: Option<WordRecord>,
    pub session: StudySession<P>,
    pub audio: AudioStatus,
    last_line: Option<String>,
}

impl<P: SurfaceProvider> Screen<P> {
    pub fn new(session: StudySession<P>) -> Self {
        Self {
            open: None,
            session,
            audio: AudioStatus::new(),
            last_line: None,
        }
    }

    /// Leave the detail view
    pub fn close(&mut self) {
        self.open = None;
        self.session.end();
        self.audio.clear();
        self.last_line = None;
    }

    /// Nothing animating and no chain running
    pub fn is_idle(&self) -> bool {
        self.session.active_character_index().is_none() && !self.session.is_playing_all()
    }

    /// Send the character strip if it changed since the last one sent
    pub async fn emit_session(&mut self, tx: &AsyncSender<String>) -> anyhow::Result<()> {
        if self.open.is_none() {
            return Ok(());
        }
        let line = render::session_line(&self.session);
        if self.last_line.as_deref() != Some(line.as_str()) {
            self.last_line = Some(line.clone());
            tx.send(line).await?;
        }
        Ok(())
    }
}

pub async fn emit(tx: &AsyncSender<String>, lines: Vec<String>) -> anyhow::Result<()> {
    for line in lines {
        tx.send(line).await?;
    }
    Ok(())
}

/// App's main loop. Runs until `Quit` (once the current animation finished),
/// input closes, or `cancel` fires.
pub async fn event_loop<P: SurfaceProvider>(
    state: Arc<AppState>,
    session: StudySession<P>,
    player: Option<Arc<dyn AudioPlayer>>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<String>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let completions = session.completions().to_async();
    let mut screen = Screen::new(session);
    let mut quitting = false;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        if quitting && screen.is_idle() {
            tracing::info!("[EVENT_LOOP] Quit");
            break;
        }

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            ticket = completions.recv() => {
                screen.session.complete(ticket?);
                screen.emit_session(&app_to_ui_tx).await?;
            }
            event = ui_to_app_rx.recv(), if !quitting => match event {
                Ok(AppEvent::Quit) | Err(_) => quitting = true,
                Ok(event) => {
                    handle_events(&state, &mut screen, player.as_deref(), &app_to_ui_tx, event)
                        .await?;
                }
            },
        }
    }

    screen.close();
    Ok(())
}

async fn handle_events<P: SurfaceProvider>(
    state: &AppState,
    screen: &mut Screen<P>,
    player: Option<&dyn AudioPlayer>,
    app_to_ui_tx: &AsyncSender<String>,
    event: AppEvent,
) -> anyhow::Result<()> {
    tracing::debug!("Handling {:?}", event);
    match event {
        AppEvent::Search(query) => handle_search(state, screen, &query, app_to_ui_tx).await?,
        AppEvent::Back => handle_back(state, screen, app_to_ui_tx).await?,
        AppEvent::Open(id) => handle_open(state, screen, &id, app_to_ui_tx).await?,
        AppEvent::Resize { viewport_width } => {
            handle_resize(state, screen, viewport_width, app_to_ui_tx).await?
        }
        AppEvent::Study(command) => handle_study(screen, command, app_to_ui_tx).await?,
        AppEvent::PlayAudio => handle_play_audio(screen, player, app_to_ui_tx).await?,
        AppEvent::Quit => {}
    }
    Ok(())
}
