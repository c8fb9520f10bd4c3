use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::conversation::errors::ConversationError;
use crate::domain::conversation::model::KitchenConversation;
use crate::domain::conversation::services::IntentInterpreterService;
use crate::domain::conversation::use_cases::converse::{
    KitchenConverseParams, KitchenConverseUseCase,
};
use crate::domain::food_item::model::NewFoodItem;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::summary::inventory_summary;
use crate::domain::logger::Logger;
use crate::domain::speech::services::{SpeechRequest, SpeechSynthesizerService};

pub struct KitchenConverseUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub interpreter: Arc<dyn IntentInterpreterService>,
    pub synthesizer: Arc<dyn SpeechSynthesizerService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl KitchenConverseUseCase for KitchenConverseUseCaseImpl {
    async fn execute(
        &self,
        params: KitchenConverseParams,
    ) -> Result<KitchenConversation, ConversationError> {
        let query = params.user_query.trim();
        if query.is_empty() {
            self.logger.warn("Kitchen conversation started without a query");
            return Ok(KitchenConversation::no_query(params.user_query));
        }

        self.logger.info(&format!("User query: {}", query));

        let inventory = self.repository.get_all_by_expiry().await?;
        let summary = inventory_summary(&inventory);

        let intent = self
            .interpreter
            .interpret(query, &summary)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Intent interpretation failed: {}", e));
            })?;

        // Purchases mentioned in conversation carry no amount or expiry.
        let new_items = intent
            .items_to_add
            .iter()
            .map(|name| NewFoodItem::with_defaults(name.clone(), params.user_id.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        // Nothing is stored unless the reply was spoken.
        let speech = SpeechRequest::new(intent.reply.clone()).with_voice(params.voice_id);
        let audio = self.synthesizer.synthesize(&speech).await.inspect_err(|e| {
            self.logger
                .error(&format!("Speech synthesis failed: {}", e));
        })?;

        self.logger
            .debug(&format!("Synthesized {} bytes of audio", audio.len()));

        let added_items = if new_items.is_empty() {
            vec![]
        } else {
            let saved = self.repository.save_all(&new_items).await?;
            self.logger
                .info(&format!("Added {} items from conversation", saved.len()));
            saved
        };

        Ok(KitchenConversation {
            text: intent.reply,
            audio: Some(audio),
            added_items,
            user_message: query.to_string(),
            ingredients_available: Some(summary),
            error: None,
        })
    }
}
