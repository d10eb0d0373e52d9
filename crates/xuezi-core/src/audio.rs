use xuezi_types::WordRecord;

/// Pronunciation playback failure. The display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AudioError {
    #[error("Audio loading was aborted")]
    Aborted,

    #[error("Network error while loading audio")]
    Network,

    #[error("Audio decoding error")]
    Decode,

    #[error("Audio format not supported or file not found")]
    UnsupportedFormat,
}

/// Audio playback provider
#[async_trait::async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Play the clip at `url`, resolving once playback finished or failed
    async fn play(&self, url: &str) -> Result<(), AudioError>;
}

/// Audio state of the detail view
#[derive(Debug, Default)]
pub struct AudioStatus {
    last_url: Option<String>,
    message: Option<String>,
}

impl AudioStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play the word's pronunciation. Failures become the status message, never an error.
    pub async fn play_word<P>(&mut self, player: &P, word: &WordRecord) -> Option<&str>
    where
        P: AudioPlayer + ?Sized,
    {
        self.play(player, &word.pronunciation_ref).await
    }

    pub async fn play<P>(&mut self, player: &P, url: &str) -> Option<&str>
    where
        P: AudioPlayer + ?Sized,
    {
        self.message = None;
        self.last_url = Some(url.to_string());

        if let Err(e) = player.play(url).await {
            tracing::warn!("Audio error: {} ({})", e, url);
            self.message = Some(e.to_string());
        }

        self.message.as_deref()
    }

    /// Last failure message, cleared by the next play
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }

    pub fn clear(&mut self) {
        self.last_url = None;
        self.message = None;
    }
}
