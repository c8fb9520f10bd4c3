use async_trait::async_trait;

use crate::domain::conversation::errors::ConversationError;
use crate::domain::conversation::model::KitchenConversation;
use crate::domain::shared::value_objects::UserId;

pub struct KitchenConverseParams {
    pub user_query: String,
    pub user_id: UserId,
    pub voice_id: Option<String>,
}

/// Answers a kitchen query and stores any groceries the user reports buying.
///
/// Items are stored only after the spoken reply has been produced, so a speech
/// failure leaves the inventory unchanged.
#[async_trait]
pub trait KitchenConverseUseCase: Send + Sync {
    async fn execute(
        &self,
        params: KitchenConverseParams,
    ) -> Result<KitchenConversation, ConversationError>;
}
