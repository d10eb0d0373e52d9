//! Drawing surfaces for the terminal.
//!
//! There is no canvas to draw on, so each surface simulates the stroke
//! animation with a tokio timer and fires its completion when the timer ends.
//! Destroying a surface cancels its timer; the completion is then dropped
//! without firing.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use xuezi_session::{
    Completion, DrawingSurface, MountPoint, SurfaceError, SurfaceOptions, SurfaceProvider,
};

/// Strokes assumed per character when no stroke data is available
const SIMULATED_STROKES: u32 = 6;
/// Time to draw one stroke at speed 1.0
const BASE_STROKE_MICROS: f32 = 300_000.0;

pub struct TerminalProvider {
    cancel: CancellationToken,
}

impl TerminalProvider {
    /// Surfaces are cancelled together with `cancel`
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }
}

impl SurfaceProvider for TerminalProvider {
    type Surface = TerminalSurface;

    fn create(
        &mut self,
        mount: MountPoint,
        character: char,
        options: &SurfaceOptions,
    ) -> Result<TerminalSurface, SurfaceError> {
        if !is_han(character) {
            return Err(SurfaceError::UnsupportedCharacter(character));
        }

        tracing::debug!(
            "Terminal surface {} for {} at {}px",
            mount.0,
            character,
            options.size
        );
        Ok(TerminalSurface {
            character,
            options: options.clone(),
            cancel: self.cancel.child_token(),
        })
    }
}

pub struct TerminalSurface {
    character: char,
    options: SurfaceOptions,
    cancel: CancellationToken,
}

impl TerminalSurface {
    fn run(&self, speed: f32, done: Completion) {
        let duration = simulated_duration(&self.options, speed);
        let cancel = self.cancel.clone();
        let character = self.character;

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("Surface for {} destroyed mid-animation", character);
                }
                _ = tokio::time::sleep(duration) => done.fire(),
            }
        });
    }
}

impl DrawingSurface for TerminalSurface {
    fn animate(&mut self, done: Completion) {
        self.run(self.options.stroke_animation_speed, done);
    }

    fn quiz(&mut self, done: Completion) {
        self.run(self.options.stroke_highlight_speed, done);
    }

    fn destroy(&mut self) {
        self.cancel.cancel();
    }
}

/// Total time for one pass over all strokes
pub fn simulated_duration(options: &SurfaceOptions, speed: f32) -> Duration {
    let drawing = (BASE_STROKE_MICROS / speed.max(0.01)).round() as u64;
    let per_stroke = Duration::from_micros(drawing)
        + Duration::from_millis(options.delay_between_strokes_ms);
    per_stroke * SIMULATED_STROKES
}

/// CJK unified ideographs, including extension A and compatibility ideographs
pub fn is_han(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2A6DF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use xuezi_config::strokes::StrokeConfig;

    #[test]
    fn test_only_han_characters_get_surfaces() {
        let mut provider = TerminalProvider::new(CancellationToken::new());
        let options = SurfaceOptions::new(300, &StrokeConfig::default());

        assert!(provider.create(MountPoint(0), '图', &options).is_ok());
        assert_eq!(
            provider.create(MountPoint(1), 'A', &options).err(),
            Some(SurfaceError::UnsupportedCharacter('A'))
        );
    }

    #[test]
    fn test_duration_follows_speed_and_delay() {
        let options = SurfaceOptions::new(300, &StrokeConfig::default());

        // 6 strokes of 300ms + 100ms delay
        assert_eq!(simulated_duration(&options, 1.0), Duration::from_millis(2400));
        // highlight speed 2.0 halves the drawing part
        assert_eq!(simulated_duration(&options, 2.0), Duration::from_millis(1500));
    }
}
