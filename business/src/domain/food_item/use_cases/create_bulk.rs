use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::FoodItem;

use super::create::CreateFoodItemParams;

pub struct CreateFoodItemsBulkParams {
    pub items: Vec<CreateFoodItemParams>,
}

#[async_trait]
pub trait CreateFoodItemsBulkUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateFoodItemsBulkParams,
    ) -> Result<Vec<FoodItem>, FoodItemError>;
}
