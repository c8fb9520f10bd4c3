use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::FoodItem;
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::get_inventory::GetFoodInventoryUseCase;
use crate::domain::logger::Logger;

pub struct GetFoodInventoryUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFoodInventoryUseCase for GetFoodInventoryUseCaseImpl {
    async fn execute(&self) -> Result<Vec<FoodItem>, FoodItemError> {
        self.logger.info("Fetching food inventory");
        let items = self.repository.get_all_by_expiry().await?;
        self.logger
            .info(&format!("Found {} food items", items.len()));
        Ok(items)
    }
}
