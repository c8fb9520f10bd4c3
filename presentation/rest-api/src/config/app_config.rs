use super::elevenlabs_config::ElevenLabsConfig;
use super::gemini_config::GeminiConfig;
use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub gemini: GeminiConfig,
    pub elevenlabs: ElevenLabsConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            gemini: GeminiConfig::from_env(),
            elevenlabs: ElevenLabsConfig::from_env(),
        }
    }
}
