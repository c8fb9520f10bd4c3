use async_trait::async_trait;
use serde_json::json;

use business::domain::speech::errors::SpeechError;
use business::domain::speech::services::{SpeechRequest, SpeechSynthesizerService};

use crate::client::ElevenLabsClient;

pub const DEFAULT_VOICE_ID: &str = "QPBKI85w0cdXVqMSJ6WB";

const STABILITY: f64 = 0.5;
const SIMILARITY_BOOST: f64 = 0.8;

pub struct SpeechSynthesizerElevenLabs {
    client: ElevenLabsClient,
    default_voice_id: String,
}

impl SpeechSynthesizerElevenLabs {
    pub fn new(client: ElevenLabsClient) -> Self {
        Self {
            client,
            default_voice_id: DEFAULT_VOICE_ID.to_string(),
        }
    }

    pub fn with_default_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.default_voice_id = voice_id.into();
        self
    }

    /// Picks the requested voice, or the default when none is given.
    ///
    /// The id becomes a path segment, so only ASCII letters, digits, `-` and `_`
    /// are accepted.
    fn voice_for<'a>(&'a self, request: &'a SpeechRequest) -> Result<&'a str, SpeechError> {
        let voice_id = request
            .voice_id
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(self.default_voice_id.as_str());

        if is_voice_id(voice_id) {
            Ok(voice_id)
        } else {
            tracing::warn!(voice_id, "rejected malformed voice id");
            Err(SpeechError::InvalidVoice)
        }
    }
}

fn is_voice_id(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[async_trait]
impl SpeechSynthesizerService for SpeechSynthesizerElevenLabs {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SpeechError> {
        let voice_id = self.voice_for(request)?;
        let body = json!({
            "text": request.text,
            "voice_settings": {
                "stability": STABILITY,
                "similarity_boost": SIMILARITY_BOOST,
            },
        });

        tracing::debug!(voice_id, chars = request.text.len(), "requesting speech");

        let response = self
            .client
            .client
            .post(self.client.text_to_speech_url(voice_id))
            .header("Content-Type", "application/json")
            .header("xi-api-key", &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "text-to-speech request failed");
                SpeechError::RequestFailed
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            tracing::error!(status, voice_id, "text-to-speech provider refused");
            return Err(SpeechError::ProviderStatus(status));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|_| SpeechError::InvalidAudio)?;

        Ok(audio.to_vec())
    }
}
