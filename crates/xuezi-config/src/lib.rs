use std::env;

use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::catalog::CatalogConfig;
use self::layout::LayoutConfig;
use self::log::LogConfig;
use self::strokes::StrokeConfig;

pub mod audio;
pub mod catalog;
pub mod layout;
pub mod log;
pub mod strokes;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub layout: LayoutConfig,
    pub strokes: StrokeConfig,
    pub audio: AudioConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Overlay `XUEZI_*` environment variables on top of the current values
    pub fn apply_env(&mut self) {
        if let Some(width) = env::var("XUEZI_VIEWPORT_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.layout.viewport_width = width;
        }

        if let Some(timeout) = env::var("XUEZI_AUDIO_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.audio.timeout_seconds = timeout;
        }

        if let Ok(level) = env::var("XUEZI_LOG") {
            self.log.level = level;
        }

        if let Ok(json) = env::var("XUEZI_LOG_JSON") {
            self.log.json = json == "1" || json.eq_ignore_ascii_case("true");
        }
    }
}
