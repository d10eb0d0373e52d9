use kanal::AsyncSender;
use xuezi_session::SurfaceProvider;

use super::{Screen, emit};
use crate::render;
use crate::state::AppState;

pub async fn handle_open<P: SurfaceProvider>(
    state: &AppState,
    screen: &mut Screen<P>,
    id: &str,
    app_to_ui_tx: &AsyncSender<String>,
) -> anyhow::Result<()> {
    let word = match state.catalog.lookup(id) {
        Ok(word) => word,
        Err(e) => {
            tracing::debug!("{}", e);
            screen.close();
            return emit(app_to_ui_tx, render::not_found(id)).await;
        }
    };

    emit(app_to_ui_tx, render::detail(word)).await?;

    if screen.open.as_ref().is_some_and(|w| w.id != word.id) {
        screen.audio.clear();
    }
    screen.open = Some(word.clone());
    screen.session.load_word(word);

    emit(app_to_ui_tx, render::failures(&screen.session)).await?;
    if let Some(label) = screen.session.position_label() {
        app_to_ui_tx.send(label).await?;
    }
    screen.emit_session(app_to_ui_tx).await
}
