use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{FoodItem, NewFoodItem};

/// Append-only store of food items. Records are never updated or deleted.
#[async_trait]
pub trait FoodItemRepository: Send + Sync {
    async fn save(&self, item: &NewFoodItem) -> Result<FoodItem, RepositoryError>;
    /// Stores every item or none of them.
    async fn save_all(&self, items: &[NewFoodItem]) -> Result<Vec<FoodItem>, RepositoryError>;
    /// All items of every user, soonest expiry first and unknown expiry last.
    async fn get_all_by_expiry(&self) -> Result<Vec<FoodItem>, RepositoryError>;
}
