use kanal::AsyncSender;
use xuezi_session::SurfaceProvider;

use super::{Screen, emit};
use crate::render;
use crate::state::AppState;

pub async fn handle_search<P: SurfaceProvider>(
    state: &AppState,
    screen: &mut Screen<P>,
    query: &str,
    app_to_ui_tx: &AsyncSender<String>,
) -> anyhow::Result<()> {
    screen.close();

    let words = state.search.filter(query, state.catalog.entries());
    tracing::debug!("Query '{}': {} results", query, words.len());
    emit(app_to_ui_tx, render::results(&words)).await
}

pub async fn handle_back<P: SurfaceProvider>(
    state: &AppState,
    screen: &mut Screen<P>,
    app_to_ui_tx: &AsyncSender<String>,
) -> anyhow::Result<()> {
    handle_search(state, screen, "", app_to_ui_tx).await
}
