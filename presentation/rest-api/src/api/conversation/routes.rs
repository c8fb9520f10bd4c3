use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::conversation::use_cases::converse::KitchenConverseUseCase;

use crate::api::conversation::dto::{KitchenConverseRequest, KitchenConverseResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ConversationApi {
    converse_use_case: Arc<dyn KitchenConverseUseCase>,
}

impl ConversationApi {
    pub fn new(converse_use_case: Arc<dyn KitchenConverseUseCase>) -> Self {
        Self { converse_use_case }
    }
}

#[OpenApi]
impl ConversationApi {
    /// Talk to the kitchen assistant
    ///
    /// Answers a kitchen question with text and speech. Groceries the user
    /// reports buying are added to the inventory with a quantity of one and
    /// no expiry date. An empty query gets a prompt to speak again. A
    /// `voice_id` must be a plain provider voice id.
    #[oai(path = "/kitchen_converse", method = "post", tag = "ApiTags::Conversation")]
    async fn kitchen_converse(&self, body: Json<KitchenConverseRequest>) -> KitchenConverseApiResponse {
        match self.converse_use_case.execute(body.0.into()).await {
            Ok(conversation) => KitchenConverseApiResponse::Ok(Json(conversation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => KitchenConverseApiResponse::BadRequest(json),
                    _ => KitchenConverseApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum KitchenConverseApiResponse {
    #[oai(status = 200)]
    Ok(Json<KitchenConverseResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
