pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod elevenlabs_config;
pub mod gemini_config;
pub mod server_config;
