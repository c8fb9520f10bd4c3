use async_trait::async_trait;

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::services::RecipeGeneratorService;

use crate::client::{DEFAULT_TEXT_MODEL, GeminiClient, text_part};

pub const CHECKPOINT_PHRASE: &str = "Say next once you have completed these steps.";

pub struct RecipeGeneratorGemini {
    client: GeminiClient,
    model: String,
}

impl RecipeGeneratorGemini {
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

    fn build_prompt(inventory_summary: &str) -> String {
        format!(
            r#"You are a friendly expert cooking guide talking with a home chef.
Only use the following ingredients from my inventory: {inventory_summary}.
Start with a brief, upbeat intro: tell the user what you'll be making today and give the recipe name.
Then, in a friendly tone, list all the required ingredients as bullet points.
Next, guide the user through the cooking process step by step, numbering each instruction and only using ingredients from the list.
Bundle the steps into small groups so the user can easily cook along or listen to the recipe.
After every step or small group of steps, say: '{CHECKPOINT_PHRASE}'
Do NOT include any extra or hallucinated ingredients or steps.
Use the ingredients which are going to expire soon first; they are listed first.
Format this for clear and friendly text-to-speech narration, helping the listener cook along as they go."#
        )
    }
}

#[async_trait]
impl RecipeGeneratorService for RecipeGeneratorGemini {
    async fn generate(&self, inventory_summary: &str) -> Result<String, RecipeError> {
        let prompt = Self::build_prompt(inventory_summary);

        self.client
            .generate_text(&self.model, vec![text_part(prompt)])
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "recipe generation call failed");
                RecipeError::GenerationFailed
            })
    }
}
