use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::FoodItem;
use crate::domain::shared::value_objects::UserId;

pub struct CreateFoodItemParams {
    pub name: String,
    pub quantity: i64,
    pub expiry_date: Option<NaiveDate>,
    pub user_id: UserId,
}

#[async_trait]
pub trait CreateFoodItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateFoodItemParams) -> Result<FoodItem, FoodItemError>;
}
