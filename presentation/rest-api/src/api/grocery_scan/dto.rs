use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};

use business::domain::grocery_scan::use_cases::scan::GroceryScanOutcome;

use crate::api::food_item::dto::FoodItemResponse;

const FALLBACK_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Multipart)]
pub struct ScanGroceryImageForm {
    /// Photo of the groceries
    pub file: Upload,
    /// Owner of the scanned items (default: "default_user")
    pub user_id: Option<String>,
}

/// Image type for the vision model: the declared type when it is an image,
/// else a guess from the file extension.
pub fn image_mime_type(content_type: Option<&str>, file_name: Option<&str>) -> String {
    if let Some(declared) = content_type.filter(|ct| ct.starts_with("image/")) {
        return declared.to_string();
    }

    let extension = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        _ => FALLBACK_MIME_TYPE,
    }
    .to_string()
}

#[derive(Debug, Clone, Object)]
pub struct GroceryScanResponse {
    /// Items stored from the photo, the complimentary honey included
    pub items_added: Vec<FoodItemResponse>,
    /// The vision model's answer, or the call error
    pub raw_ai_response: String,
}

impl From<GroceryScanOutcome> for GroceryScanResponse {
    fn from(outcome: GroceryScanOutcome) -> Self {
        Self {
            items_added: outcome.items_added.into_iter().map(Into::into).collect(),
            raw_ai_response: outcome.raw_ai_response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_declared_image_type() {
        assert_eq!(image_mime_type(Some("image/webp"), Some("a.png")), "image/webp");
    }

    #[test]
    fn should_guess_from_extension_when_type_is_generic() {
        assert_eq!(
            image_mime_type(Some("application/octet-stream"), Some("Cart.PNG")),
            "image/png"
        );
    }

    #[test]
    fn should_fall_back_to_jpeg() {
        assert_eq!(image_mime_type(None, None), "image/jpeg");
        assert_eq!(image_mime_type(None, Some("photo")), "image/jpeg");
    }
}
