use kanal::AsyncReceiver;

/// Print everything the event loop renders until it hangs up
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<String>) -> anyhow::Result<()> {
    while let Ok(line) = app_to_ui_rx.recv().await {
        println!("{line}");
    }
    tracing::debug!("UI channel closed");
    Ok(())
}
