use chrono::NaiveDate;

use super::errors::FoodItemError;
use crate::domain::shared::value_objects::UserId;

/// Quantity recorded when an item is added without an explicit amount.
pub const DEFAULT_QUANTITY: i64 = 1;

/// A food item persisted in the inventory.
///
/// `id` is assigned by the store on insertion and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub expiry_date: Option<NaiveDate>,
    pub user_id: UserId,
}

/// A food item that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodItem {
    pub name: String,
    pub quantity: i64,
    pub expiry_date: Option<NaiveDate>,
    pub user_id: UserId,
}

pub struct NewFoodItemProps {
    pub name: String,
    pub quantity: i64,
    pub expiry_date: Option<NaiveDate>,
    pub user_id: UserId,
}

impl NewFoodItem {
    /// Only the name is checked; any quantity (zero and negatives included) is accepted.
    pub fn new(props: NewFoodItemProps) -> Result<Self, FoodItemError> {
        if props.name.trim().is_empty() {
            return Err(FoodItemError::NameEmpty);
        }

        Ok(Self {
            name: props.name,
            quantity: props.quantity,
            expiry_date: props.expiry_date,
            user_id: props.user_id,
        })
    }

    /// Item with a quantity of one and an unknown expiry date.
    pub fn with_defaults(name: impl Into<String>, user_id: UserId) -> Result<Self, FoodItemError> {
        Self::new(NewFoodItemProps {
            name: name.into(),
            quantity: DEFAULT_QUANTITY,
            expiry_date: None,
            user_id,
        })
    }
}

impl FoodItem {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        quantity: i64,
        expiry_date: Option<NaiveDate>,
        user_id: UserId,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            expiry_date,
            user_id,
        }
    }
}
