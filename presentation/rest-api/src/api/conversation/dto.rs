use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use poem_openapi::Object;

use business::domain::conversation::model::KitchenConversation;
use business::domain::conversation::use_cases::converse::KitchenConverseParams;
use business::domain::shared::value_objects::UserId;

use crate::api::food_item::dto::FoodItemResponse;

#[derive(Debug, Clone, Object)]
pub struct KitchenConverseRequest {
    /// What the user said
    #[oai(skip_serializing_if_is_none)]
    pub user_query: Option<String>,
    /// Alias of `user_query`, used when `user_query` is missing or blank
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
    /// Owner of any groceries added (default: "default_user")
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
    /// Voice for the spoken reply (default: server-configured voice)
    #[oai(skip_serializing_if_is_none)]
    pub voice_id: Option<String>,
}

impl From<KitchenConverseRequest> for KitchenConverseParams {
    fn from(request: KitchenConverseRequest) -> Self {
        let user_query = [request.user_query, request.message]
            .into_iter()
            .flatten()
            .find(|q| !q.trim().is_empty())
            .unwrap_or_default();

        Self {
            user_query,
            user_id: UserId::or_default(request.user_id),
            voice_id: request.voice_id,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct KitchenConverseResponse {
    /// Assistant reply
    pub text: String,
    /// Spoken reply as base64-encoded audio (MP3)
    #[oai(skip_serializing_if_is_none)]
    pub audio_base64: Option<String>,
    /// Groceries added to the inventory during this turn
    pub added_items: Vec<FoodItemResponse>,
    /// The query the assistant answered
    pub user_message: String,
    /// Inventory summary the assistant was given
    #[oai(skip_serializing_if_is_none)]
    pub ingredients_available: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl From<KitchenConversation> for KitchenConverseResponse {
    fn from(conversation: KitchenConversation) -> Self {
        Self {
            text: conversation.text,
            audio_base64: conversation.audio.map(|audio| STANDARD.encode(audio)),
            added_items: conversation
                .added_items
                .into_iter()
                .map(Into::into)
                .collect(),
            user_message: conversation.user_message,
            ingredients_available: conversation.ingredients_available,
            error: conversation.error,
        }
    }
}
