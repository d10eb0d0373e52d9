use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use xuezi_config::audio::AudioConfig;
use xuezi_core::{AudioError, AudioPlayer};

/// A fetched pronunciation clip
#[derive(Debug, Clone)]
pub struct Clip {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Fetches pronunciation clips over HTTP
#[derive(Clone)]
pub struct HttpAudioPlayer {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpAudioPlayer {
    pub fn new(config: &AudioConfig) -> Self {
        Self::with_timeout(Duration::from_secs(config.timeout_seconds))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// Download and validate the clip at `url`
    pub async fn fetch(&self, url: &str) -> Result<Clip, AudioError> {
        match tokio::time::timeout(self.timeout, self.fetch_inner(url)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::debug!("Audio fetch timed out after {:?}: {}", self.timeout, url);
                Err(AudioError::Aborted)
            }
        }
    }

    async fn fetch_inner(&self, url: &str) -> Result<Clip, AudioError> {
        let response = self.client.get(url).send().await.map_err(classify_transport)?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        check_response(response.status(), content_type.as_deref())?;

        let bytes = response.bytes().await.map_err(classify_transport)?;
        if bytes.is_empty() {
            return Err(AudioError::Decode);
        }

        Ok(Clip {
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}

#[async_trait::async_trait]
impl AudioPlayer for HttpAudioPlayer {
    async fn play(&self, url: &str) -> Result<(), AudioError> {
        let clip = self.fetch(url).await?;
        tracing::info!(
            "Playing {} bytes ({})",
            clip.bytes.len(),
            clip.content_type.as_deref().unwrap_or("unknown type")
        );
        Ok(())
    }
}

fn classify_transport(e: reqwest::Error) -> AudioError {
    if e.is_timeout() {
        AudioError::Aborted
    } else if e.is_decode() || e.is_body() {
        AudioError::Decode
    } else {
        AudioError::Network
    }
}

/// Status and content type checks before the body is read
fn check_response(status: StatusCode, content_type: Option<&str>) -> Result<(), AudioError> {
    if status == StatusCode::NOT_FOUND || status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
        return Err(AudioError::UnsupportedFormat);
    }
    if !status.is_success() {
        return Err(AudioError::Network);
    }

    match content_type {
        Some(ct) if !is_audio_type(ct) => Err(AudioError::UnsupportedFormat),
        _ => Ok(()),
    }
}

fn is_audio_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence.starts_with("audio/") || essence == "application/octet-stream"
}
