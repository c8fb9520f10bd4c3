#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech.request_failed")]
    RequestFailed,
    #[error("speech.provider_status_{0}")]
    ProviderStatus(u16),
    #[error("speech.invalid_audio")]
    InvalidAudio,
    #[error("speech.invalid_voice")]
    InvalidVoice,
}
