//! Delete Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::DepotExt as _,
    orders::{errors::into_api_error, models::MessageResponse},
    state::State,
};

/// Delete Order Handler
#[endpoint(
    tags("orders"),
    summary = "Delete Order",
    responses(
        (status_code = StatusCode::OK, description = "Order deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
#[tracing::instrument(name = "orders.delete", skip_all, err(Debug))]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    state
        .app
        .orders
        .delete_order(id.into())
        .await
        .map_err(into_api_error)?;

    tracing::info!(order_uuid = %id, "deleted order");

    Ok(Json(MessageResponse {
        message: "Order deleted successfully".to_string(),
    }))
}
