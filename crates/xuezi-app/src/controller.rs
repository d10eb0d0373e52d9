use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use xuezi_core::AudioPlayer;
use xuezi_io::HttpAudioPlayer;
use xuezi_session::{SizingPolicy, StudySession};
use xuezi_types::AppEvent;

use crate::events::event_loop;
use crate::input::spawn_stdin_reader;
use crate::state::AppState;
use crate::terminal::TerminalProvider;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<String>, AsyncReceiver<String>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256), // rendered lines
            ui_to_app: kanal::bounded_async(64),  // typed commands
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Queue `initial` events, then run the study loop.
    /// Without `interactive` the loop quits once the queued work is done.
    pub async fn run(self, initial: Vec<AppEvent>, interactive: bool) -> anyhow::Result<()> {
        let AppController {
            channels,
            state,
            cancel_token,
        } = self;
        let (app_to_ui_tx, app_to_ui_rx) = channels.app_to_ui;
        let (ui_to_app_tx, ui_to_app_rx) = channels.ui_to_app;

        let mut tasks: JoinSet<anyhow::Result<()>> = JoinSet::new();
        tasks.spawn(ui_loop(app_to_ui_rx));

        let (session, player) = {
            let config = state.config.read().await;
            let session = StudySession::new(
                TerminalProvider::new(cancel_token.child_token()),
                SizingPolicy::new(config.layout.clone()),
                config.strokes.clone(),
                config.layout.viewport_width,
            );
            let player: Option<Arc<dyn AudioPlayer>> = config
                .audio
                .enabled
                .then(|| Arc::new(HttpAudioPlayer::new(&config.audio)) as Arc<dyn AudioPlayer>);
            (session, player)
        };

        // Queue before the loop starts so the bounded channel cannot stall
        let sender = {
            let initial_tx = ui_to_app_tx.clone();
            let quit = !interactive;
            tokio::spawn(async move {
                for event in initial {
                    initial_tx.send(event).await?;
                }
                if quit {
                    initial_tx.send(AppEvent::Quit).await?;
                }
                anyhow::Ok(())
            })
        };

        if interactive {
            eprintln!("{}", crate::input::HELP);
            spawn_stdin_reader(ui_to_app_tx.clone_sync());
        }
        drop(ui_to_app_tx);

        let result = event_loop(
            state,
            session,
            player,
            ui_to_app_rx,
            app_to_ui_tx,
            cancel_token.clone(),
        )
        .await;

        cancel_token.cancel();
        sender.abort();

        // ui_loop drains and ends once the event loop's sender is gone
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Err(e)) => tracing::error!("Task failed: {e}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
                Ok(Ok(())) => {}
            }
        }

        result
    }
}
