use kanal::AsyncSender;
use xuezi_session::{Availability, SurfaceProvider};
use xuezi_types::StudyCommand;

use super::Screen;
use crate::state::AppState;

pub async fn handle_study<P: SurfaceProvider>(
    screen: &mut Screen<P>,
    command: StudyCommand,
    app_to_ui_tx: &AsyncSender<String>,
) -> anyhow::Result<()> {
    if screen.open.is_none() {
        app_to_ui_tx.send("Open a word first".to_string()).await?;
        return Ok(());
    }

    let session = &mut screen.session;
    let message = match command {
        StudyCommand::Animate(index) => unavailable(session.animate(index), index),
        StudyCommand::Practice(index) => unavailable(session.practice(index), index),
        StudyCommand::PlayAll => match session.play_all() {
            Availability::Started => None,
            Availability::Unavailable => Some("Nothing to play".to_string()),
        },
        StudyCommand::FocusNext | StudyCommand::FocusPrev => {
            let focused = if command == StudyCommand::FocusNext {
                session.focus_next()
            } else {
                session.focus_prev()
            };
            session.position_label().or_else(|| {
                session
                    .characters()
                    .get(focused)
                    .map(|c| c.to_string())
            })
        }
    };

    if let Some(message) = message {
        app_to_ui_tx.send(message).await?;
    }
    screen.emit_session(app_to_ui_tx).await
}

fn unavailable(availability: Availability, index: usize) -> Option<String> {
    match availability {
        Availability::Started => None,
        Availability::Unavailable => Some(format!("Character {} is unavailable", index + 1)),
    }
}

pub async fn handle_resize<P: SurfaceProvider>(
    state: &AppState,
    screen: &mut Screen<P>,
    viewport_width: u32,
    app_to_ui_tx: &AsyncSender<String>,
) -> anyhow::Result<()> {
    state.config.write().await.layout.viewport_width = viewport_width;

    let before = screen.session.surface_size();
    screen.session.resize(viewport_width);

    if screen.open.is_some() && screen.session.surface_size() != before {
        app_to_ui_tx
            .send(format!("Surface size {}px", screen.session.surface_size()))
            .await?;
    }
    screen.emit_session(app_to_ui_tx).await
}
