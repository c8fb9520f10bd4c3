#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.generation_failed")]
    GenerationFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
