use async_trait::async_trait;

use super::errors::RecipeError;

/// Service port for narrated recipes built only from the given ingredients.
///
/// Returns the model's text untouched.
#[async_trait]
pub trait RecipeGeneratorService: Send + Sync {
    async fn generate(&self, inventory_summary: &str) -> Result<String, RecipeError>;
}
