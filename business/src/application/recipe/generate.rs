use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::summary::inventory_summary;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::services::RecipeGeneratorService;
use crate::domain::recipe::use_cases::generate::GenerateRecipeUseCase;

pub struct GenerateRecipeUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub generator: Arc<dyn RecipeGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateRecipeUseCase for GenerateRecipeUseCaseImpl {
    async fn execute(&self) -> Result<String, RecipeError> {
        // Expiry order puts the ingredients to use first at the front of the list.
        let items = self.repository.get_all_by_expiry().await?;
        let summary = inventory_summary(&items);

        self.logger.info(&format!(
            "Generating recipe from {} ingredients",
            items.len()
        ));

        let recipe = self.generator.generate(&summary).await.inspect_err(|e| {
            self.logger
                .error(&format!("Recipe generation failed: {}", e));
        })?;

        self.logger
            .info(&format!("Recipe generated ({} chars)", recipe.len()));
        Ok(recipe)
    }
}
