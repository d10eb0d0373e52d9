use tracing_subscriber::EnvFilter;
use xuezi_config::log::LogConfig;

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
/// Logs go to stderr so command output stays clean.
pub fn init_tracing(config: &LogConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
