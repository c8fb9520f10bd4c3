use elevenlabs::speech_synthesizer::DEFAULT_VOICE_ID;

/// Configuration for ElevenLabs text-to-speech access.
pub struct ElevenLabsConfig {
    pub api_key: String,
    pub voice_id: String,
}

impl ElevenLabsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup("ELEVENLABS_API_KEY").unwrap_or_default(),
            voice_id: lookup("ELEVENLABS_VOICE_ID")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_VOICE_ID.to_string()),
        }
    }
}
