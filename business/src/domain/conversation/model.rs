use crate::domain::food_item::model::FoodItem;

/// Reply given when the user did not say anything.
pub const NO_QUERY_REPLY: &str = "I didn't hear anything. What would you like to know?";
pub const NO_QUERY_ERROR: &str = "No query provided";

/// What the language model made of a user utterance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntentResult {
    /// Names of groceries the user reported buying, in the order given.
    pub items_to_add: Vec<String>,
    pub reply: String,
}

/// Outcome of one conversation turn.
#[derive(Debug, Clone)]
pub struct KitchenConversation {
    pub text: String,
    pub audio: Option<Vec<u8>>,
    pub added_items: Vec<FoodItem>,
    pub user_message: String,
    pub ingredients_available: Option<String>,
    pub error: Option<String>,
}

impl KitchenConversation {
    pub fn no_query(user_message: String) -> Self {
        Self {
            text: NO_QUERY_REPLY.to_string(),
            audio: None,
            added_items: vec![],
            user_message,
            ingredients_available: None,
            error: Some(NO_QUERY_ERROR.to_string()),
        }
    }
}
