use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::grocery_scan::errors::GroceryScanError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for GroceryScanError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (name, message) = match &self {
            GroceryScanError::CallFailed(_) => ("ScanError", "grocery_scan.call_failed"),
            GroceryScanError::InvalidItem(_) => ("ValidationError", "food_item.invalid"),
            GroceryScanError::Repository(_) => ("InternalError", "repository.persistence"),
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(name, message)),
        )
    }
}
