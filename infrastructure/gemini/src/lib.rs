pub mod client;
pub mod grocery_scanner;
pub mod intent_interpreter;
pub mod literal;
pub mod recipe_generator;

pub use client::GeminiClient;
pub use grocery_scanner::GroceryScannerGemini;
pub use intent_interpreter::IntentInterpreterGemini;
pub use recipe_generator::RecipeGeneratorGemini;
