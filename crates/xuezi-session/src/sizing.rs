use xuezi_config::layout::{LayoutConfig, TierBounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Narrow,
    Medium,
    Wide,
}

/// Per-character surface dimension from viewport width and character count
#[derive(Debug, Clone)]
pub struct SizingPolicy {
    layout: LayoutConfig,
}

impl SizingPolicy {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    pub fn tier(&self, viewport_width: u32) -> Tier {
        if viewport_width < self.layout.narrow_below {
            Tier::Narrow
        } else if viewport_width < self.layout.wide_from {
            Tier::Medium
        } else {
            Tier::Wide
        }
    }

    fn bounds(&self, tier: Tier) -> TierBounds {
        match tier {
            Tier::Narrow => self.layout.narrow,
            Tier::Medium => self.layout.medium,
            Tier::Wide => self.layout.wide,
        }
    }

    /// Width left after gutters, split evenly, clamped to the tier bounds.
    /// Never grows when `char_count` grows.
    pub fn surface_size(&self, viewport_width: u32, char_count: usize) -> u32 {
        let bounds = self.bounds(self.tier(viewport_width));
        let n = u32::try_from(char_count.max(1)).unwrap_or(u32::MAX);

        let gutters = bounds.gutter.saturating_mul(n.saturating_add(1));
        let per_char = viewport_width.saturating_sub(gutters) / n;

        per_char.max(bounds.min).min(bounds.max)
    }
}
