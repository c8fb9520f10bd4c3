use super::model::FoodItem;

/// Summary handed to the language model when nothing is stored.
pub const EMPTY_INVENTORY_SUMMARY: &str = "no ingredients currently stored";

/// Joins item names with `", "`, keeping the order of `items`.
pub fn inventory_summary(items: &[FoodItem]) -> String {
    if items.is_empty() {
        return EMPTY_INVENTORY_SUMMARY.to_string();
    }

    items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
