use reqwest::Client;

pub const ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";

/// Shared ElevenLabs HTTP client configuration.
#[derive(Clone)]
pub struct ElevenLabsClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl ElevenLabsClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: ELEVENLABS_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the text-to-speech endpoint URL for a voice.
    pub fn text_to_speech_url(&self, voice_id: &str) -> String {
        format!("{}/v1/text-to-speech/{}", self.base_url, voice_id)
    }
}
