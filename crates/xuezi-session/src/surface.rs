use xuezi_config::strokes::StrokeConfig;

use crate::completion::Completion;

/// Display region reserved for one character position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountPoint(pub usize);

/// Everything a provider needs to draw one character
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOptions {
    /// Width and height in pixels
    pub size: u32,
    pub padding: u32,
    pub stroke_animation_speed: f32,
    pub stroke_highlight_speed: f32,
    pub delay_between_strokes_ms: u64,
}

impl SurfaceOptions {
    pub fn new(size: u32, strokes: &StrokeConfig) -> Self {
        Self {
            size,
            padding: strokes.padding.min(size / 4),
            stroke_animation_speed: strokes.stroke_animation_speed,
            stroke_highlight_speed: strokes.stroke_highlight_speed,
            delay_between_strokes_ms: strokes.delay_between_strokes_ms,
        }
    }
}

/// Stroke-order drawing resource bound to one mount point and one character
pub trait DrawingSurface {
    /// Play the stroke animation, firing `done` when it ends
    fn animate(&mut self, done: Completion);

    /// Start interactive stroke practice, firing `done` when the quiz ends
    fn quiz(&mut self, done: Completion);

    /// Release the mount point. Must tolerate partially created surfaces.
    fn destroy(&mut self);
}

/// Creates drawing surfaces
pub trait SurfaceProvider {
    type Surface: DrawingSurface;

    fn create(
        &mut self,
        mount: MountPoint,
        character: char,
        options: &SurfaceOptions,
    ) -> Result<Self::Surface, SurfaceError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("No stroke data for {0}")]
    UnsupportedCharacter(char),

    #[error("Surface provider error: {0}")]
    Provider(String),
}

/// Owning handle for a live surface. Releasing is idempotent and also happens on drop.
pub struct SurfaceHandle<S: DrawingSurface> {
    index: usize,
    surface: Option<S>,
}

impl<S: DrawingSurface> SurfaceHandle<S> {
    pub fn new(index: usize, surface: S) -> Self {
        Self {
            index,
            surface: Some(surface),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_live(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn release(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            tracing::debug!("Destroying surface for character {}", self.index);
            surface.destroy();
        }
    }
}

impl<S: DrawingSurface> Drop for SurfaceHandle<S> {
    fn drop(&mut self) {
        self.release();
    }
}
