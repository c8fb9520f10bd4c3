use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_item::errors::FoodItemError;
use crate::domain::food_item::model::{FoodItem, NewFoodItem, NewFoodItemProps};
use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::food_item::use_cases::create_bulk::{
    CreateFoodItemsBulkParams, CreateFoodItemsBulkUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateFoodItemsBulkUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateFoodItemsBulkUseCase for CreateFoodItemsBulkUseCaseImpl {
    async fn execute(
        &self,
        params: CreateFoodItemsBulkParams,
    ) -> Result<Vec<FoodItem>, FoodItemError> {
        self.logger.info(&format!(
            "Adding {} food items in bulk",
            params.items.len()
        ));

        // One invalid entry rejects the whole batch before anything is written.
        let items = params
            .items
            .into_iter()
            .map(|p| {
                NewFoodItem::new(NewFoodItemProps {
                    name: p.name,
                    quantity: p.quantity,
                    expiry_date: p.expiry_date,
                    user_id: p.user_id,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if items.is_empty() {
            return Ok(vec![]);
        }

        let saved = self.repository.save_all(&items).await?;

        self.logger
            .info(&format!("Stored {} food items", saved.len()));
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::food_item::use_cases::create::CreateFoodItemParams;
    use crate::domain::shared::value_objects::UserId;
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

    fn entry(name: &str, quantity: i64) -> CreateFoodItemParams {
        CreateFoodItemParams {
            name: name.to_string(),
            quantity,
            expiry_date: None,
            user_id: UserId::new("user-1"),
        }
    }

    fn echo_with_ids(items: &[NewFoodItem]) -> Vec<FoodItem> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                FoodItem::from_repository(
                    i as i64 + 1,
                    item.name.clone(),
                    item.quantity,
                    item.expiry_date,
                    item.user_id.clone(),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn should_store_all_items_in_one_batch() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo
            .expect_save_all()
            .withf(|items| items.len() == 2)
            .times(1)
            .returning(|items| Ok(echo_with_ids(items)));

        let use_case = CreateFoodItemsBulkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let saved = use_case
            .execute(CreateFoodItemsBulkParams {
                items: vec![entry("rice", 1), entry("beans", 4)],
            })
            .await
            .unwrap();

        assert_eq!(saved.len(), 2);
        assert_eq!(saved[1].name, "beans");
        assert_eq!(saved[1].quantity, 4);
    }

    #[tokio::test]
    async fn should_reject_whole_batch_when_one_name_is_blank() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo.expect_save_all().times(0);

        let use_case = CreateFoodItemsBulkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateFoodItemsBulkParams {
                items: vec![entry("rice", 1), entry(" ", 1)],
            })
            .await;

        assert!(matches!(result.unwrap_err(), FoodItemError::NameEmpty));
    }

    #[tokio::test]
    async fn should_skip_repository_when_batch_is_empty() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo.expect_save_all().times(0);

        let use_case = CreateFoodItemsBulkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let saved = use_case
            .execute(CreateFoodItemsBulkParams { items: vec![] })
            .await
            .unwrap();

        assert!(saved.is_empty());
    }

    #[tokio::test]
    async fn should_return_error_when_batch_is_rejected_by_storage() {
        let mut mock_repo = MockFoodItemRepo::new();
        mock_repo
            .expect_save_all()
            .returning(|_| Err(RepositoryError::TransactionFailed));

        let use_case = CreateFoodItemsBulkUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateFoodItemsBulkParams {
                items: vec![entry("rice", 1)],
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            FoodItemError::Repository(RepositoryError::TransactionFailed)
        ));
    }
}
