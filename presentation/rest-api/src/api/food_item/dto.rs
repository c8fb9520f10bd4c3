use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::food_item::model::FoodItem;
use business::domain::food_item::use_cases::create::CreateFoodItemParams;
use business::domain::shared::value_objects::UserId;

pub const BULK_ADDED_MESSAGE: &str = "Bulk food items added!";

#[derive(Debug, Clone, Object)]
pub struct FoodItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Amount on hand
    pub quantity: i64,
    /// Expiry date (YYYY-MM-DD), omitted when unknown
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<NaiveDate>,
    /// Owner of the item
    pub user_id: String,
}

impl From<FoodItemRequest> for CreateFoodItemParams {
    fn from(request: FoodItemRequest) -> Self {
        Self {
            name: request.name,
            quantity: request.quantity,
            expiry_date: request.expiry_date,
            user_id: UserId::new(request.user_id),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FoodItemResponse {
    /// Identifier assigned by the store
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    /// Expiry date, omitted when unknown
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<NaiveDate>,
    pub user_id: String,
}

impl From<FoodItem> for FoodItemResponse {
    fn from(item: FoodItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            expiry_date: item.expiry_date,
            user_id: item.user_id.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BulkAddResponse {
    pub message: String,
    /// Stored items, in request order
    pub items: Vec<FoodItemResponse>,
}
