use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::grocery_scan::model::GroceryImage;
use business::domain::grocery_scan::use_cases::scan::{
    ScanGroceryImageParams, ScanGroceryImageUseCase,
};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::grocery_scan::dto::{GroceryScanResponse, ScanGroceryImageForm, image_mime_type};
use crate::api::tags::ApiTags;

pub struct GroceryScanApi {
    scan_use_case: Arc<dyn ScanGroceryImageUseCase>,
}

impl GroceryScanApi {
    pub fn new(scan_use_case: Arc<dyn ScanGroceryImageUseCase>) -> Self {
        Self { scan_use_case }
    }
}

#[OpenApi]
impl GroceryScanApi {
    /// Scan a grocery photo
    ///
    /// Recognises the groceries on an uploaded photo and adds them to the
    /// inventory, together with a complimentary jar of honey. When the vision
    /// model cannot be reached, nothing is stored and `raw_ai_response`
    /// carries the error.
    #[oai(path = "/scan_grocery_image", method = "post", tag = "ApiTags::GroceryScan")]
    async fn scan_grocery_image(&self, form: ScanGroceryImageForm) -> ScanGroceryImageResponse {
        let mime_type = image_mime_type(form.file.content_type(), form.file.file_name());

        let bytes = match form.file.into_vec().await {
            Ok(bytes) if !bytes.is_empty() => bytes,
            Ok(_) => {
                return ScanGroceryImageResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "grocery_scan.empty_image",
                )));
            }
            Err(e) => {
                tracing::warn!(error = %e, "unreadable grocery upload");
                return ScanGroceryImageResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "grocery_scan.unreadable_image",
                )));
            }
        };

        let params = ScanGroceryImageParams {
            image: GroceryImage { bytes, mime_type },
            user_id: UserId::or_default(form.user_id),
        };

        match self.scan_use_case.execute(params).await {
            Ok(outcome) => ScanGroceryImageResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                ScanGroceryImageResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ScanGroceryImageResponse {
    #[oai(status = 200)]
    Ok(Json<GroceryScanResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
