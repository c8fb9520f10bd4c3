use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::food_item::use_cases::create::CreateFoodItemUseCase;
use business::domain::food_item::use_cases::create_bulk::{
    CreateFoodItemsBulkParams, CreateFoodItemsBulkUseCase,
};
use business::domain::food_item::use_cases::get_inventory::GetFoodInventoryUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::food_item::dto::{
    BULK_ADDED_MESSAGE, BulkAddResponse, FoodItemRequest, FoodItemResponse,
};
use crate::api::tags::ApiTags;

pub struct FoodItemApi {
    create_use_case: Arc<dyn CreateFoodItemUseCase>,
    create_bulk_use_case: Arc<dyn CreateFoodItemsBulkUseCase>,
    get_inventory_use_case: Arc<dyn GetFoodInventoryUseCase>,
}

impl FoodItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateFoodItemUseCase>,
        create_bulk_use_case: Arc<dyn CreateFoodItemsBulkUseCase>,
        get_inventory_use_case: Arc<dyn GetFoodInventoryUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            create_bulk_use_case,
            get_inventory_use_case,
        }
    }
}

/// Food inventory API
///
/// Endpoints for adding food items and listing the inventory.
#[OpenApi]
impl FoodItemApi {
    /// Add a food item
    ///
    /// Stores one item and returns it with its assigned identifier.
    #[oai(path = "/add_food", method = "post", tag = "ApiTags::FoodItems")]
    async fn add_food(&self, body: Json<FoodItemRequest>) -> AddFoodResponse {
        match self.create_use_case.execute(body.0.into()).await {
            Ok(item) => AddFoodResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddFoodResponse::BadRequest(json),
                    _ => AddFoodResponse::InternalError(json),
                }
            }
        }
    }

    /// Add several food items
    ///
    /// Stores every item in one transaction: either all are stored or none.
    #[oai(path = "/add_food_bulk", method = "post", tag = "ApiTags::FoodItems")]
    async fn add_food_bulk(&self, body: Json<Vec<FoodItemRequest>>) -> AddFoodBulkResponse {
        let params = CreateFoodItemsBulkParams {
            items: body.0.into_iter().map(Into::into).collect(),
        };

        match self.create_bulk_use_case.execute(params).await {
            Ok(items) => AddFoodBulkResponse::Ok(Json(BulkAddResponse {
                message: BULK_ADDED_MESSAGE.to_string(),
                items: items.into_iter().map(Into::into).collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddFoodBulkResponse::BadRequest(json),
                    _ => AddFoodBulkResponse::InternalError(json),
                }
            }
        }
    }

    /// List the inventory
    ///
    /// Returns every stored item, soonest expiry first. Items without an
    /// expiry date come last.
    #[oai(path = "/food_inventory", method = "get", tag = "ApiTags::FoodItems")]
    async fn food_inventory(&self) -> FoodInventoryResponse {
        match self.get_inventory_use_case.execute().await {
            Ok(items) => {
                let responses: Vec<FoodItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                FoodInventoryResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                FoodInventoryResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddFoodResponse {
    #[oai(status = 200)]
    Ok(Json<FoodItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddFoodBulkResponse {
    #[oai(status = 200)]
    Ok(Json<BulkAddResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FoodInventoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FoodItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
