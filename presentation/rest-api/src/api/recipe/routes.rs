use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::recipe::use_cases::generate::GenerateRecipeUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::RecipeResponse;
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    generate_use_case: Arc<dyn GenerateRecipeUseCase>,
}

impl RecipeApi {
    pub fn new(generate_use_case: Arc<dyn GenerateRecipeUseCase>) -> Self {
        Self { generate_use_case }
    }
}

#[OpenApi]
impl RecipeApi {
    /// Generate a recipe
    ///
    /// Returns an AI-narrated recipe that only uses the stored ingredients,
    /// favouring the ones that expire first.
    #[oai(path = "/generate_recipe", method = "get", tag = "ApiTags::Recipes")]
    async fn generate_recipe(&self) -> GenerateRecipeResponse {
        match self.generate_use_case.execute().await {
            Ok(recipe) => GenerateRecipeResponse::Ok(Json(RecipeResponse { recipe })),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GenerateRecipeResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
