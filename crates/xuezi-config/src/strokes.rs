use serde::{Deserialize, Serialize};

fn default_size() -> u32 {
    500
}

fn default_padding() -> u32 {
    40
}

fn default_stroke_animation_speed() -> f32 {
    1.0
}

fn default_stroke_highlight_speed() -> f32 {
    2.0
}

fn default_delay_between_strokes_ms() -> u64 {
    100
}

/// Stroke timing handed to the surface provider on every create
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StrokeConfig {
    /// Used when no viewport width is known
    #[serde(default = "default_size")]
    pub default_size: u32,
    #[serde(default = "default_padding")]
    pub padding: u32,
    #[serde(default = "default_stroke_animation_speed")]
    pub stroke_animation_speed: f32,
    #[serde(default = "default_stroke_highlight_speed")]
    pub stroke_highlight_speed: f32,
    #[serde(default = "default_delay_between_strokes_ms")]
    pub delay_between_strokes_ms: u64,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            padding: default_padding(),
            stroke_animation_speed: default_stroke_animation_speed(),
            stroke_highlight_speed: default_stroke_highlight_speed(),
            delay_between_strokes_ms: default_delay_between_strokes_ms(),
        }
    }
}
