use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::{FoodItem, NewFoodItem, NewFoodItemProps};
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::create::{CreateFoodItemParams, CreateFoodItemUseCase};
use crate::domain::logger::Logger;

pub struct CreateFoodItemUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateFoodItemUseCase for CreateFoodItemUseCaseImpl {
    async fn execute(&self, params: CreateFoodItemParams) -> Result<FoodItem, FoodItemError> {
        self.logger
            .info(&format!("Adding food item: {}", params.name));

        let item = NewFoodItem::new(NewFoodItemProps {
            name: params.name,
            quantity: params.quantity,
            expiry_date: params.expiry_date,
            user_id: params.user_id,
        })?;

        let saved = self.repository.save(&item).await?;

        self.logger
            .info(&format!("Food item stored with id: {}", saved.id));
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use chrono::NaiveDate;
    use mockall::mock;

    mock! {
        pub FoodItemRepo {}

        #[async_trait]
        impl FoodItemRepository for FoodItemRepo {
            async fn save(&self, item: &NewFoodItem) -> Result<FoodItem, RepositoryError>;
            async fn save_all(&self, items: &[NewFoodItem]) -> Result<Vec<FoodItem>, RepositoryError>;
            async fn get_all_by_expiry(&self) -> Result<Vec<FoodItem>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(name: &str) -> CreateFoodItemParams {
        CreateFoodItemParams {
            name: name.to_string(),
            quantity: 3,
            expiry_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            user_id: UserId::new("user-1"),
        }
    }

    #[tokio::test]
    async fn should_return_stored_item_with_assigned_id() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo
            .expect_save()
            .withf(|item| item.name == "Cheddar" && item.quantity == 3)
            .times(1)
            .returning(|item| {
                Ok(FoodItem::from_repository(
                    7,
                    item.name.clone(),
                    item.quantity,
                    item.expiry_date,
                    item.user_id.clone(),
                ))
            });

        let use_case = CreateFoodItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let item = use_case.execute(params("Cheddar")).await.unwrap();

        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Cheddar");
        assert_eq!(item.expiry_date, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(item.user_id.as_str(), "user-1");
    }

    #[tokio::test]
    async fn should_reject_item_when_name_is_empty() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo.expect_save().times(0);

        let use_case = CreateFoodItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("")).await;

        assert!(matches!(result.unwrap_err(), FoodItemError::NameEmpty));
    }

    #[tokio::test]
    async fn should_return_error_when_repository_fails() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateFoodItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Butter")).await;

        assert!(matches!(
            result.unwrap_err(),
            FoodItemError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
