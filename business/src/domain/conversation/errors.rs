use crate::domain::errors::RepositoryError;
use crate::domain::food_item::errors::FoodItemError;
use crate::domain::speech::errors::SpeechError;

#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    #[error("conversation.interpretation_failed")]
    InterpretationFailed,
    #[error("speech.synthesis_failed")]
    Speech(#[from] SpeechError),
    #[error("food_item.invalid")]
    InvalidItem(#[from] FoodItemError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
