//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tracker_app::domain::orders::data::NewOrder;

use crate::{
    errors::ApiError,
    extensions::DepotExt as _,
    orders::{errors::into_api_error, models::OrderResponse},
    state::State,
};

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateOrderRequest {
    #[serde(default)]
    pub customer_name: String,

    #[serde(default)]
    pub product: String,

    /// Defaults to 1 when omitted
    pub quantity: Option<i32>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            customer_name: request.customer_name,
            product: request.product,
            quantity: request.quantity,
        }
    }
}

/// Create Order Handler
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing customer name or product"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.create",
    skip(json, depot, res),
    fields(order_uuid = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order: NewOrder = json.into_inner().into();

    order.validate().map_err(into_api_error)?;

    let created = state
        .app
        .orders
        .create_order(order)
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("order_uuid", tracing::field::display(created.uuid));

    res.add_header(LOCATION, format!("/api/orders/{}", created.uuid), true)
        .map_err(|source| {
            tracing::error!("failed to set location header: {source}");

            ApiError::internal()
        })?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
