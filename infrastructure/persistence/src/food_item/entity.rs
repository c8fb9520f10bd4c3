use chrono::NaiveDate;
use sqlx::FromRow;

use business::domain::food_item::model::FoodItem;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct FoodItemEntity {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub expiry_date: Option<NaiveDate>,
    pub user_id: String,
}

impl FoodItemEntity {
    pub fn into_domain(self) -> FoodItem {
        FoodItem::from_repository(
            self.id,
            self.name,
            self.quantity,
            self.expiry_date,
            UserId::new(self.user_id),
        )
    }
}
