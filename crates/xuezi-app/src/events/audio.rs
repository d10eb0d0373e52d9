use kanal::AsyncSender;
use xuezi_core::AudioPlayer;
use xuezi_session::SurfaceProvider;

use super::Screen;

pub async fn handle_play_audio<P: SurfaceProvider>(
    screen: &mut Screen<P>,
    player: Option<&dyn AudioPlayer>,
    app_to_ui_tx: &AsyncSender<String>,
) -> anyhow::Result<()> {
    let Some(word) = screen.open.as_ref() else {
        app_to_ui_tx.send("Open a word first".to_string()).await?;
        return Ok(());
    };
    let Some(player) = player else {
        app_to_ui_tx.send("Audio is disabled".to_string()).await?;
        return Ok(());
    };

    tracing::info!("Playing pronunciation of {}", word.script);
    let line = match screen.audio.play_word(player, word).await {
        Some(message) => message.to_string(),
        None => format!("Played {}", word.romanization),
    };
    app_to_ui_tx.send(line).await?;
    Ok(())
}
