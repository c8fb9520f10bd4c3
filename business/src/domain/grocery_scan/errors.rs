use crate::domain::errors::RepositoryError;
use crate::domain::food_item::errors::FoodItemError;

#[derive(Debug, thiserror::Error)]
pub enum GroceryScanError {
    #[error("grocery_scan.call_failed: {0}")]
    CallFailed(String),
    #[error("food_item.invalid")]
    InvalidItem(#[from] FoodItemError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
