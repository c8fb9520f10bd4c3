use chrono::{Duration, NaiveDate};

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::{DEFAULT_QUANTITY, NewFoodItem, NewFoodItemProps};
use crate::domain::shared::value_objects::UserId;

/// Added to every successful scan.
pub const COMPLIMENTARY_ITEM_NAME: &str = "honey";
pub const COMPLIMENTARY_ITEM_SHELF_LIFE_DAYS: i64 = 365;

/// Photo uploaded for scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// One grocery recognised on a photo.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedGrocery {
    pub name: String,
    pub quantity: Option<i64>,
    pub expiry_date: Option<NaiveDate>,
}

impl ScannedGrocery {
    pub fn into_new_food_item(self, user_id: &UserId) -> Result<NewFoodItem, FoodItemError> {
        NewFoodItem::new(NewFoodItemProps {
            name: self.name,
            quantity: self.quantity.unwrap_or(DEFAULT_QUANTITY),
            expiry_date: self.expiry_date,
            user_id: user_id.clone(),
        })
    }
}

/// Groceries read from the model's answer, plus that answer for diagnostics.
///
/// `items` is empty when the answer could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryScan {
    pub items: Vec<ScannedGrocery>,
    pub raw_text: String,
}

impl GroceryScan {
    /// Appends the complimentary honey jar, good for a year from `today`.
    pub fn with_complimentary_item(mut self, today: NaiveDate) -> Self {
        self.items.push(ScannedGrocery {
            name: COMPLIMENTARY_ITEM_NAME.to_string(),
            quantity: Some(1),
            expiry_date: Some(today + Duration::days(COMPLIMENTARY_ITEM_SHELF_LIFE_DAYS)),
        });
        self
    }
}
