use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::food_item::errors::FoodItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FoodItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            FoodItemError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "food_item.name_empty",
            ),
            FoodItemError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
