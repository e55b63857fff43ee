//! Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError,
    extensions::DepotExt as _,
    orders::{errors::into_api_error, models::OrderResponse},
    state::State,
};

/// Order Index Handler
///
/// Returns every order, newest first.
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state
        .app
        .orders
        .list_orders()
        .await
        .map_err(into_api_error)?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
