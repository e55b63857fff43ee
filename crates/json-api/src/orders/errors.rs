//! Order Errors

use tracing::error;

use tracker_app::domain::orders::OrdersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::AlreadyExists => ApiError::conflict("Order already exists"),
        OrdersServiceError::NotFound => ApiError::not_found("Order not found"),
        OrdersServiceError::MissingRequiredData => ApiError::bad_request("All fields are required"),
        OrdersServiceError::InvalidData => ApiError::bad_request("Invalid order data"),
        OrdersServiceError::Sql(source) => {
            error!("order query failed: {source}");

            ApiError::internal()
        }
    }
}
