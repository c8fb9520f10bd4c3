use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    /// Narrated recipe, ready to be read aloud
    pub recipe: String,
}
