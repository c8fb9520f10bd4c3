use std::sync::Arc;

use sqlx::SqlitePool;

use elevenlabs::{ElevenLabsClient, SpeechSynthesizerElevenLabs};
use gemini::{GeminiClient, GroceryScannerGemini, IntentInterpreterGemini, RecipeGeneratorGemini};
use logger::TracingLogger;
use persistence::food_item::repository::FoodItemRepositorySqlite;

use business::application::conversation::converse::KitchenConverseUseCaseImpl;
use business::application::food_item::create::CreateFoodItemUseCaseImpl;
use business::application::food_item::create_bulk::CreateFoodItemsBulkUseCaseImpl;
use business::application::food_item::get_inventory::GetFoodInventoryUseCaseImpl;
use business::application::grocery_scan::scan::ScanGroceryImageUseCaseImpl;
use business::application::recipe::generate::GenerateRecipeUseCaseImpl;

use crate::api::conversation::routes::ConversationApi;
use crate::api::food_item::routes::FoodItemApi;
use crate::api::grocery_scan::routes::GroceryScanApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::recipe::routes::RecipeApi;
use crate::config::elevenlabs_config::ElevenLabsConfig;
use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub food_item_api: FoodItemApi,
    pub recipe_api: RecipeApi,
    pub conversation_api: ConversationApi,
    pub grocery_scan_api: GroceryScanApi,
}

impl DependencyContainer {
    pub fn new(
        pool: SqlitePool,
        gemini_config: &GeminiConfig,
        elevenlabs_config: &ElevenLabsConfig,
    ) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let food_item_repository = Arc::new(FoodItemRepositorySqlite::new(pool));

        let gemini_client = GeminiClient::new(gemini_config.api_key.clone());
        let intent_interpreter = Arc::new(
            IntentInterpreterGemini::new(gemini_client.clone())
                .with_model(&gemini_config.text_model),
        );
        let recipe_generator = Arc::new(
            RecipeGeneratorGemini::new(gemini_client.clone())
                .with_model(&gemini_config.text_model),
        );
        let grocery_scanner = Arc::new(
            GroceryScannerGemini::new(gemini_client).with_model(&gemini_config.vision_model),
        );

        let speech_synthesizer = Arc::new(
            SpeechSynthesizerElevenLabs::new(ElevenLabsClient::new(
                elevenlabs_config.api_key.clone(),
            ))
            .with_default_voice(&elevenlabs_config.voice_id),
        );

        // Food item use cases
        let create_use_case = Arc::new(CreateFoodItemUseCaseImpl {
            repository: food_item_repository.clone(),
            logger: logger.clone(),
        });
        let create_bulk_use_case = Arc::new(CreateFoodItemsBulkUseCaseImpl {
            repository: food_item_repository.clone(),
            logger: logger.clone(),
        });
        let get_inventory_use_case = Arc::new(GetFoodInventoryUseCaseImpl {
            repository: food_item_repository.clone(),
            logger: logger.clone(),
        });

        // AI-backed use cases
        let generate_recipe_use_case = Arc::new(GenerateRecipeUseCaseImpl {
            repository: food_item_repository.clone(),
            generator: recipe_generator,
            logger: logger.clone(),
        });
        let converse_use_case = Arc::new(KitchenConverseUseCaseImpl {
            repository: food_item_repository.clone(),
            interpreter: intent_interpreter,
            synthesizer: speech_synthesizer,
            logger: logger.clone(),
        });
        let scan_use_case = Arc::new(ScanGroceryImageUseCaseImpl {
            repository: food_item_repository,
            scanner: grocery_scanner,
            logger,
        });

        Self {
            health_api,
            food_item_api: FoodItemApi::new(
                create_use_case,
                create_bulk_use_case,
                get_inventory_use_case,
            ),
            recipe_api: RecipeApi::new(generate_recipe_use_case),
            conversation_api: ConversationApi::new(converse_use_case),
            grocery_scan_api: GroceryScanApi::new(scan_use_case),
        }
    }
}
