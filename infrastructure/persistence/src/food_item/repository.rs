use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Sqlite, SqlitePool};

use business::domain::errors::RepositoryError;
use business::domain::food_item::model::{FoodItem, NewFoodItem};
use business::domain::food_item::repository::FoodItemRepository;

use super::entity::FoodItemEntity;

const INSERT_SQL: &str =
    "INSERT INTO food_items (name, quantity, expiry_date, user_id) VALUES (?, ?, ?, ?)";

pub struct FoodItemRepositorySqlite {
    pool: SqlitePool,
}

impl FoodItemRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn insert_query(item: &NewFoodItem) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        sqlx::query(INSERT_SQL)
            .bind(&item.name)
            .bind(item.quantity)
            .bind(item.expiry_date)
            .bind(item.user_id.as_str())
    }

    fn persisted(id: i64, item: &NewFoodItem) -> FoodItem {
        FoodItem::from_repository(
            id,
            item.name.clone(),
            item.quantity,
            item.expiry_date,
            item.user_id.clone(),
        )
    }
}

#[async_trait]
impl FoodItemRepository for FoodItemRepositorySqlite {
    async fn save(&self, item: &NewFoodItem) -> Result<FoodItem, RepositoryError> {
        let result = Self::insert_query(item)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "food item insert failed");
                RepositoryError::DatabaseError
            })?;

        Ok(Self::persisted(result.last_insert_rowid(), item))
    }

    async fn save_all(&self, items: &[NewFoodItem]) -> Result<Vec<FoodItem>, RepositoryError> {
        if items.is_empty() {
            return Ok(vec![]);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::TransactionFailed)?;

        let mut saved = Vec::with_capacity(items.len());
        for item in items {
            // Returning early drops `tx`, which rolls the batch back.
            let result = Self::insert_query(item)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, name = %item.name, "bulk insert rejected");
                    RepositoryError::DatabaseError
                })?;
            saved.push(Self::persisted(result.last_insert_rowid(), item));
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::TransactionFailed)?;

        Ok(saved)
    }

    async fn get_all_by_expiry(&self) -> Result<Vec<FoodItem>, RepositoryError> {
        // Unknown expiry dates go last; id keeps equal dates in insertion order.
        let entities = sqlx::query_as::<_, FoodItemEntity>(
            "SELECT id, name, quantity, expiry_date, user_id FROM food_items ORDER BY expiry_date IS NULL, expiry_date ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
