use async_trait::async_trait;

use super::errors::SpeechError;

/// Text to be spoken, optionally with a provider-specific voice.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    /// Falls back to the synthesizer's configured voice when `None`.
    pub voice_id: Option<String>,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: None,
        }
    }

    pub fn with_voice(mut self, voice_id: Option<String>) -> Self {
        self.voice_id = voice_id;
        self
    }
}

/// Service port for turning text into audio bytes.
///
/// Any non-success answer from the provider is returned as an error; there is
/// no retry and no fallback voice.
#[async_trait]
pub trait SpeechSynthesizerService: Send + Sync {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError>;
}
