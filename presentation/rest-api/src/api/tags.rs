use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    FoodItems,
    Recipes,
    Conversation,
    GroceryScan,
}
