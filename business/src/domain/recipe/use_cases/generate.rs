use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;

#[async_trait]
pub trait GenerateRecipeUseCase: Send + Sync {
    async fn execute(&self) -> Result<String, RecipeError>;
}
