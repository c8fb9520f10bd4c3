use async_trait::async_trait;

use business::domain::conversation::errors::ConversationError;
use business::domain::conversation::model::IntentResult;
use business::domain::conversation::services::IntentInterpreterService;

use crate::client::{DEFAULT_TEXT_MODEL, GeminiClient, text_part};
use crate::literal::parse_literal;

const ITEMS_MARKER: &str = "items_to_add";
const REPLY_MARKER: &str = "assistant_response";

pub struct IntentInterpreterGemini {
    client: GeminiClient,
    model: String,
}

impl IntentInterpreterGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: DEFAULT_TEXT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_prompt(user_query: &str, inventory_summary: &str) -> String {
        format!(
            r#"You are a smart kitchen assistant.
IMPORTANT: You ONLY help with cooking, recipes, food, groceries and kitchen topics.
If the user asks about anything else (math, weather, general knowledge...), politely steer them back to the kitchen,
for example: "I'm your kitchen assistant! I can help with recipes, cooking tips and your groceries. What would you like to cook today?"

If the user's message is about buying groceries or adding items to the inventory, list the names of the items they bought.
Otherwise, give a short, friendly and accurate kitchen answer.

User's current inventory: {inventory_summary}.
User's voice command: {user_query}.

Respond in exactly this format, one line each:
{ITEMS_MARKER} = ["item name", ...]
{REPLY_MARKER} = "A friendly reply."
Use {ITEMS_MARKER} = [] when nothing was bought."#
        )
    }

    /// Reads the two marker lines out of the model's answer.
    ///
    /// Malformed output never fails: a bad items line means no items and a
    /// missing reply line means the whole answer is the reply.
    fn parse_response(text: &str) -> IntentResult {
        let marker_value = |marker: &str| {
            text.lines()
                .map(str::trim_start)
                .find(|line| line.starts_with(marker))
                .map(|line| line.split_once('=').map_or(line, |(_, rest)| rest).trim())
        };

        let items_to_add = marker_value(ITEMS_MARKER)
            .and_then(|list| parse_literal(list).ok())
            .and_then(|value| serde_json::from_value::<Vec<String>>(value).ok())
            .unwrap_or_default()
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        let reply = marker_value(REPLY_MARKER)
            .map(|reply| reply.trim_matches('"').trim())
            .filter(|reply| !reply.is_empty())
            .unwrap_or(text)
            .to_string();

        IntentResult {
            items_to_add,
            reply,
        }
    }
}

#[async_trait]
impl IntentInterpreterService for IntentInterpreterGemini {
    async fn interpret(
        &self,
        user_query: &str,
        inventory_summary: &str,
    ) -> Result<IntentResult, ConversationError> {
        let prompt = Self::build_prompt(user_query, inventory_summary);

        let text = self
            .client
            .generate_text(&self.model, vec![text_part(prompt)])
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "intent interpretation call failed");
                ConversationError::InterpretationFailed
            })?;

        Ok(Self::parse_response(&text))
    }
}
