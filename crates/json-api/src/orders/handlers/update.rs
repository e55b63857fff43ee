//! Update Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tracker_app::domain::orders::data::OrderUpdate;

use crate::{
    errors::ApiError,
    extensions::DepotExt as _,
    orders::{
        errors::into_api_error,
        models::{OrderResponse, OrderStatusBody},
    },
    state::State,
};

/// Update Order Request
///
/// Omitted fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateOrderRequest {
    pub status: Option<OrderStatusBody>,
    pub customer_name: Option<String>,
    pub product: Option<String>,
    pub quantity: Option<i32>,
}

impl From<UpdateOrderRequest> for OrderUpdate {
    fn from(request: UpdateOrderRequest) -> Self {
        OrderUpdate {
            status: request.status.map(Into::into),
            customer_name: request.customer_name,
            product: request.product,
            quantity: request.quantity,
        }
    }
}

/// Order Update Handler
#[endpoint(
    tags("orders"),
    summary = "Update Order",
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.update",
    skip(id, json, depot),
    fields(order_uuid = tracing::field::Empty, status = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<UpdateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let update: OrderUpdate = json.into_inner().into();
    let id = id.into_inner();

    let span = tracing::Span::current();

    span.record("order_uuid", tracing::field::display(id));

    if let Some(status) = update.status {
        span.record("status", tracing::field::display(status));
    }

    let order = state
        .app
        .orders
        .update_order(id.into(), update)
        .await
        .map_err(into_api_error)?;

    Ok(Json(order.into()))
}
