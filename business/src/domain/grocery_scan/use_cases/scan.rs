use async_trait::async_trait;

use crate::domain::food_item::model::FoodItem;
use crate::domain::grocery_scan::errors::GroceryScanError;
use crate::domain::grocery_scan::model::GroceryImage;
use crate::domain::shared::value_objects::UserId;

pub struct ScanGroceryImageParams {
    pub image: GroceryImage,
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct GroceryScanOutcome {
    pub items_added: Vec<FoodItem>,
    pub raw_ai_response: String,
}

#[async_trait]
pub trait ScanGroceryImageUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ScanGroceryImageParams,
    ) -> Result<GroceryScanOutcome, GroceryScanError>;
}
