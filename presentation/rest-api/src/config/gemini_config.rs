use gemini::client::{DEFAULT_TEXT_MODEL, DEFAULT_VISION_MODEL};

/// Configuration for Gemini API access.
///
/// The key is not validated here; a missing key surfaces when Gemini rejects a call.
pub struct GeminiConfig {
    pub api_key: String,
    pub text_model: String,
    pub vision_model: String,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup("GEMINI_API_KEY").unwrap_or_default(),
            text_model: lookup("GEMINI_TEXT_MODEL")
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            vision_model: lookup("GEMINI_VISION_MODEL")
                .unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_models_and_leave_key_empty() {
        let config = GeminiConfig::from_lookup(|_| None);

        assert_eq!(config.api_key, "");
        assert_eq!(config.text_model, "gemini-2.5-flash");
        assert_eq!(config.vision_model, "gemini-2.5-flash-image-preview");
    }

    #[test]
    fn should_read_overrides() {
        let config = GeminiConfig::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some("g-key".to_string()),
            "GEMINI_TEXT_MODEL" => Some("gemini-pro".to_string()),
            _ => None,
        });

        assert_eq!(config.api_key, "g-key");
        assert_eq!(config.text_model, "gemini-pro");
        assert_eq!(config.vision_model, "gemini-2.5-flash-image-preview");
    }
}
