use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::conversation::errors::ConversationError;
use business::domain::speech::errors::SpeechError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ConversationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ConversationError::InterpretationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "GenerationError",
                "conversation.interpretation_failed",
            ),
            ConversationError::Speech(SpeechError::InvalidVoice) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "speech.invalid_voice",
            ),
            ConversationError::Speech(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SpeechError",
                "speech.synthesis_failed",
            ),
            ConversationError::InvalidItem(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ValidationError",
                "food_item.invalid",
            ),
            ConversationError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
