use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;

use crate::domain::food_item::repository::FoodItemRepository;
use crate::domain::grocery_scan::errors::GroceryScanError;
use crate::domain::grocery_scan::services::GroceryScannerService;
use crate::domain::grocery_scan::use_cases::scan::{
    GroceryScanOutcome, ScanGroceryImageParams, ScanGroceryImageUseCase,
};
use crate::domain::logger::Logger;

pub struct ScanGroceryImageUseCaseImpl {
    pub repository: Arc<dyn FoodItemRepository>,
    pub scanner: Arc<dyn GroceryScannerService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ScanGroceryImageUseCase for ScanGroceryImageUseCaseImpl {
    async fn execute(
        &self,
        params: ScanGroceryImageParams,
    ) -> Result<GroceryScanOutcome, GroceryScanError> {
        self.logger.info(&format!(
            "Scanning grocery image ({} bytes, {})",
            params.image.bytes.len(),
            params.image.mime_type
        ));

        // A failed model call still answers with an empty scan.
        let scan = match self.scanner.scan(&params.image).await {
            Ok(scan) => scan,
            Err(GroceryScanError::CallFailed(message)) => {
                self.logger
                    .error(&format!("Grocery scanner call failed: {}", message));
                return Ok(GroceryScanOutcome {
                    items_added: vec![],
                    raw_ai_response: format!("Error: {}", message),
                });
            }
            Err(other) => return Err(other),
        };

        if scan.items.is_empty() {
            self.logger.warn(&format!(
                "No groceries recognised, raw response: {}",
                scan.raw_text
            ));
        }

        let scan = scan.with_complimentary_item(Local::now().date_naive());

        let new_items = scan
            .items
            .into_iter()
            .map(|grocery| grocery.into_new_food_item(&params.user_id))
            .collect::<Result<Vec<_>, _>>()?;

        let items_added = self.repository.save_all(&new_items).await?;

        self.logger
            .info(&format!("Grocery scan added {} items", items_added.len()));

        Ok(GroceryScanOutcome {
            items_added,
            raw_ai_response: scan.raw_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::food_item::model::{FoodItem, NewFoodItem};
    use crate::domain::grocery_scan::model::{GroceryImage, GroceryScan, ScannedGrocery};
    use crate::domain::shared::value_objects::UserId;
    use chrono::{Duration, NaiveDate};
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
        pub Scanner {}

        #[async_trait]
        impl GroceryScannerService for Scanner {
            async fn scan(&self, image: &GroceryImage) -> Result<GroceryScan, GroceryScanError>;
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

    fn params() -> ScanGroceryImageParams {
        ScanGroceryImageParams {
            image: GroceryImage {
                bytes: vec![0xFF, 0xD8, 0xFF],
                mime_type: "image/jpeg".to_string(),
            },
            user_id: UserId::new("shopper"),
        }
    }

    fn echo_repo(expected_len: usize) -> MockFoodItemRepo {
        let mut repo = MockFoodItemRepo::new();
        repo.expect_save_all()
            .withf(move |items| items.len() == expected_len)
            .times(1)
            .returning(|items| {
                Ok(items
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
                    .collect())
            });
        repo
    }

    fn honey_expiry_candidates() -> [NaiveDate; 2] {
        // Computed after the scan, so a midnight rollover shifts it by one day.
        let today = Local::now().date_naive();
        [today + Duration::days(365), today + Duration::days(364)]
    }

    #[tokio::test]
    async fn should_store_scanned_items_followed_by_honey() {
        let mut scanner = MockScanner::new();
        scanner.expect_scan().returning(|_| {
            Ok(GroceryScan {
                items: vec![ScannedGrocery {
                    name: "milk".to_string(),
                    quantity: Some(2),
                    expiry_date: NaiveDate::from_ymd_opt(2025, 1, 1),
                }],
                raw_text: "[{'name': 'milk'}]".to_string(),
            })
        });

        let use_case = ScanGroceryImageUseCaseImpl {
            repository: Arc::new(echo_repo(2)),
            scanner: Arc::new(scanner),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(params()).await.unwrap();

        assert_eq!(outcome.items_added.len(), 2);
        assert_eq!(outcome.items_added[0].name, "milk");
        assert_eq!(outcome.items_added[0].quantity, 2);
        assert_eq!(outcome.items_added[1].name, "honey");
        assert_eq!(outcome.items_added[1].quantity, 1);
        assert!(
            honey_expiry_candidates()
                .iter()
                .any(|d| outcome.items_added[1].expiry_date == Some(*d))
        );
        assert!(
            outcome
                .items_added
                .iter()
                .all(|i| i.user_id.as_str() == "shopper")
        );
        assert_eq!(outcome.raw_ai_response, "[{'name': 'milk'}]");
    }

    #[tokio::test]
    async fn should_store_only_honey_when_response_unparseable() {
        let mut scanner = MockScanner::new();
        scanner.expect_scan().returning(|_| {
            Ok(GroceryScan {
                items: vec![],
                raw_text: "I see a shopping bag".to_string(),
            })
        });

        let use_case = ScanGroceryImageUseCaseImpl {
            repository: Arc::new(echo_repo(1)),
            scanner: Arc::new(scanner),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(params()).await.unwrap();

        assert_eq!(outcome.items_added.len(), 1);
        assert_eq!(outcome.items_added[0].name, "honey");
        assert_eq!(outcome.raw_ai_response, "I see a shopping bag");
    }

    #[tokio::test]
    async fn should_swallow_call_failure_into_empty_outcome() {
        let mut repo = MockFoodItemRepo::new();
        repo.expect_save_all().times(0);

        let mut scanner = MockScanner::new();
        scanner
            .expect_scan()
            .returning(|_| Err(GroceryScanError::CallFailed("status 503".to_string())));

        let use_case = ScanGroceryImageUseCaseImpl {
            repository: Arc::new(repo),
            scanner: Arc::new(scanner),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(params()).await.unwrap();

        assert!(outcome.items_added.is_empty());
        assert_eq!(outcome.raw_ai_response, "Error: status 503");
    }

    #[tokio::test]
    async fn should_return_error_when_storage_rejects_batch() {
        let mut repo = MockFoodItemRepo::new();
        repo.expect_save_all()
            .returning(|_| Err(RepositoryError::TransactionFailed));

        let mut scanner = MockScanner::new();
        scanner.expect_scan().returning(|_| {
            Ok(GroceryScan {
                items: vec![],
                raw_text: "[]".to_string(),
            })
        });

        let use_case = ScanGroceryImageUseCaseImpl {
            repository: Arc::new(repo),
            scanner: Arc::new(scanner),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute(params()).await.unwrap_err(),
            GroceryScanError::Repository(RepositoryError::TransactionFailed)
        ));
    }
}
