use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use serde::Deserialize;

use business::domain::grocery_scan::errors::GroceryScanError;
use business::domain::grocery_scan::model::{GroceryImage, GroceryScan, ScannedGrocery};
use business::domain::grocery_scan::services::GroceryScannerService;

use crate::client::{DEFAULT_VISION_MODEL, GeminiClient, inline_data_part, text_part};
use crate::literal::parse_literal;

const VISION_PROMPT: &str = r#"You are a grocery inventory assistant. Given a photo of shopping items, output only a literal list of records,
each with: name (string), optional quantity (integer, if visible) and an estimated expiry_date (YYYY-MM-DD, guess it if not visible).
Use standard grocery shelf lives. Example: [{"name": "apple", "quantity": 6, "expiry_date": "2025-10-26"}]
If you see unclear or unknown items, best guess their name. Output nothing else."#;

#[derive(Deserialize)]
struct GroceryRecord {
    name: String,
    #[serde(default)]
    quantity: Option<i64>,
    #[serde(default)]
    expiry_date: Option<String>,
}

impl GroceryRecord {
    fn into_scanned(self) -> Option<ScannedGrocery> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(ScannedGrocery {
            name: name.to_string(),
            quantity: self.quantity,
            // A guess the model could not format is as good as no guess.
            expiry_date: self
                .expiry_date
                .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok()),
        })
    }
}

pub struct GroceryScannerGemini {
    client: GeminiClient,
    model: String,
}

impl GroceryScannerGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: DEFAULT_VISION_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Removes a surrounding ```` ``` ```` fence and its language tag, if any.
    fn strip_code_fence(text: &str) -> &str {
        let trimmed = text.trim();
        let Some(fenced) = trimmed.strip_prefix("```") else {
            return trimmed;
        };
        let body = fenced.split("```").next().unwrap_or_default();
        body.trim_start_matches(|c: char| c.is_ascii_alphanumeric())
            .trim()
    }

    /// Any deviation from a list of well-formed records yields no items.
    fn parse_response(text: &str) -> Vec<ScannedGrocery> {
        let records = parse_literal(Self::strip_code_fence(text))
            .ok()
            .and_then(|value| serde_json::from_value::<Vec<GroceryRecord>>(value).ok())
            .unwrap_or_default();

        let scanned: Vec<ScannedGrocery> = records
            .into_iter()
            .filter_map(GroceryRecord::into_scanned)
            .collect();

        if scanned.is_empty() {
            tracing::warn!(raw = %text, "vision reply held no usable groceries");
        }
        scanned
    }
}

#[async_trait]
impl GroceryScannerService for GroceryScannerGemini {
    async fn scan(&self, image: &GroceryImage) -> Result<GroceryScan, GroceryScanError> {
        let parts = vec![
            text_part(VISION_PROMPT),
            inline_data_part(&image.mime_type, STANDARD.encode(&image.bytes)),
        ];

        let raw_text = self
            .client
            .generate_text(&self.model, parts)
            .await
            .map_err(|e| GroceryScanError::CallFailed(e.to_string()))?;

        Ok(GroceryScan {
            items: Self::parse_response(&raw_text),
            raw_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{candidate_reply, spawn_stub};
    use poem::http::StatusCode;

    #[test]
    fn should_strip_fence_with_language_tag() {
        let text = "```python\n[{'name': 'milk'}]\n```";

        assert_eq!(GroceryScannerGemini::strip_code_fence(text), "[{'name': 'milk'}]");
    }

    #[test]
    fn should_strip_bare_fence() {
        let text = "  ```\n[]\n```  ";

        assert_eq!(GroceryScannerGemini::strip_code_fence(text), "[]");
    }

    #[test]
    fn should_leave_unfenced_text_alone() {
        assert_eq!(GroceryScannerGemini::strip_code_fence(" [1] "), "[1]");
    }

    #[test]
    fn should_parse_fenced_milk_record() {
        let text = "```json\n[{\"name\":\"milk\",\"quantity\":2,\"expiry_date\":\"2025-01-01\"}]\n```";

        let items = GroceryScannerGemini::parse_response(text);

        assert_eq!(
            items,
            vec![ScannedGrocery {
                name: "milk".to_string(),
                quantity: Some(2),
                expiry_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            }]
        );
    }

    #[test]
    fn should_accept_records_without_quantity() {
        let text = "[{'name': 'bananas', 'expiry_date': '2025-03-04'}, {'name': 'flour', 'quantity': None}]";

        let items = GroceryScannerGemini::parse_response(text);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, None);
        assert_eq!(items[1].expiry_date, None);
    }

    #[test]
    fn should_treat_unreadable_dates_as_unknown() {
        let items = GroceryScannerGemini::parse_response("[{'name': 'bread', 'expiry_date': 'next week'}]");

        assert_eq!(items[0].name, "bread");
        assert_eq!(items[0].expiry_date, None);
    }

    #[test]
    fn should_yield_nothing_for_prose() {
        assert!(GroceryScannerGemini::parse_response("I can see milk and bread.").is_empty());
    }

    #[test]
    fn should_yield_nothing_when_a_record_is_malformed() {
        let text = "[{'name': 'milk', 'quantity': 'two'}, {'name': 'eggs'}]";

        assert!(GroceryScannerGemini::parse_response(text).is_empty());
    }

    #[test]
    fn should_yield_nothing_for_runaway_nesting() {
        let text = format!("```python\n{}\n```", "[".repeat(50_000));

        assert!(GroceryScannerGemini::parse_response(&text).is_empty());
    }

    #[test]
    fn should_skip_blank_names() {
        let items = GroceryScannerGemini::parse_response("[{'name': '  '}, {'name': 'rice'}]");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "rice");
    }

    #[tokio::test]
    async fn should_send_image_inline_and_keep_raw_text() {
        let raw = "[{'name': 'milk', 'quantity': 2, 'expiry_date': '2025-01-01'}]";
        let stub = spawn_stub(StatusCode::OK, candidate_reply(raw)).await;
        let scanner =
            GroceryScannerGemini::new(GeminiClient::new("k".to_string()).with_base_url(&stub.base_url));
        let image = GroceryImage {
            bytes: vec![0xFF, 0xD8, 0xFF],
            mime_type: "image/jpeg".to_string(),
        };

        let scan = scanner.scan(&image).await.unwrap();

        assert_eq!(scan.items.len(), 1);
        assert_eq!(scan.raw_text, raw);
        let body = stub.last_body();
        let inline = &body["contents"][0]["parts"][1]["inline_data"];
        assert_eq!(inline["mime_type"], "image/jpeg");
        assert_eq!(inline["data"], "/9j/");
        let requests = stub.requests.lock().unwrap();
        assert_eq!(
            requests[0].path,
            "/models/gemini-2.5-flash-image-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn should_report_call_failure_with_message() {
        let stub = spawn_stub(StatusCode::SERVICE_UNAVAILABLE, "{}".to_string()).await;
        let scanner =
            GroceryScannerGemini::new(GeminiClient::new("k".to_string()).with_base_url(&stub.base_url));
        let image = GroceryImage {
            bytes: vec![1, 2, 3],
            mime_type: "image/png".to_string(),
        };

        match scanner.scan(&image).await {
            Err(GroceryScanError::CallFailed(message)) => assert_eq!(message, "gemini.status_503"),
            other => panic!("expected call failure, got {:?}", other.map(|s| s.raw_text)),
        }
    }
}
