use serde::{Deserialize, Serialize};

fn default_viewport_width() -> u32 {
    1024
}

fn default_narrow_below() -> u32 {
    640
}

fn default_wide_from() -> u32 {
    1024
}

fn default_narrow() -> TierBounds {
    TierBounds {
        min: 120,
        max: 280,
        gutter: 32,
    }
}

fn default_medium() -> TierBounds {
    TierBounds {
        min: 160,
        max: 360,
        gutter: 64,
    }
}

fn default_wide() -> TierBounds {
    TierBounds {
        min: 200,
        max: 500,
        gutter: 128,
    }
}

/// Clamp bounds for one breakpoint tier, in pixels
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TierBounds {
    pub min: u32,
    pub max: u32,
    /// Horizontal space reserved around and between surfaces
    pub gutter: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    /// Viewports narrower than this use the narrow tier
    #[serde(default = "default_narrow_below")]
    pub narrow_below: u32,
    /// Viewports at least this wide use the wide tier
    #[serde(default = "default_wide_from")]
    pub wide_from: u32,
    #[serde(default = "default_narrow")]
    pub narrow: TierBounds,
    #[serde(default = "default_medium")]
    pub medium: TierBounds,
    #[serde(default = "default_wide")]
    pub wide: TierBounds,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            narrow_below: default_narrow_below(),
            wide_from: default_wide_from(),
            narrow: default_narrow(),
            medium: default_medium(),
            wide: default_wide(),
        }
    }
}
