use reqwest::Client;
use serde_json::{Value, json};
use thiserror::Error;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_VISION_MODEL: &str = "gemini-2.5-flash-image-preview";

#[derive(Error, Debug, PartialEq)]
pub enum GeminiError {
    #[error("gemini.request_failed: {0}")]
    RequestFailed(String),
    #[error("gemini.status_{0}")]
    Status(u16),
    #[error("gemini.invalid_response")]
    InvalidResponse,
    #[error("gemini.empty_response")]
    EmptyResponse,
}

/// Shared Gemini HTTP client configuration.
#[derive(Clone)]
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the generateContent endpoint URL for a model.
    /// Accepts both `gemini-x` and `models/gemini-x` spellings.
    pub fn generate_content_url(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Sends one user turn made of `parts` and returns the concatenated reply text.
    pub async fn generate_text(&self, model: &str, parts: Vec<Value>) -> Result<String, GeminiError> {
        let body = json!({
            "contents": [
                {"role": "user", "parts": parts},
            ],
        });

        let response = self
            .client
            .post(self.generate_content_url(model))
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(model, status = status.as_u16(), "Gemini rejected the request");
            return Err(GeminiError::Status(status.as_u16()));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| GeminiError::InvalidResponse)?;

        extract_text(&data).ok_or(GeminiError::EmptyResponse)
    }
}

/// Text part of a request.
pub fn text_part(text: impl Into<String>) -> Value {
    json!({"text": text.into()})
}

/// Inline binary part of a request, already base64 encoded.
pub fn inline_data_part(mime_type: &str, data_base64: String) -> Value {
    json!({"inline_data": {"mime_type": mime_type, "data": data_base64}})
}

fn extract_text(data: &Value) -> Option<String> {
    let text: String = data["candidates"][0]["content"]["parts"]
        .as_array()?
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect();

    if text.is_empty() { None } else { Some(text) }
}
