use async_trait::async_trait;

use super::errors::GroceryScanError;
use super::model::{GroceryImage, GroceryScan};

/// Service port for listing the groceries visible on a photo.
///
/// An answer that cannot be parsed is not an error: the scan comes back with
/// no items and the raw answer. Only a failed model call yields
/// `GroceryScanError::CallFailed`.
#[async_trait]
pub trait GroceryScannerService: Send + Sync {
    async fn scan(&self, image: &GroceryImage) -> Result<GroceryScan, GroceryScanError>;
}
