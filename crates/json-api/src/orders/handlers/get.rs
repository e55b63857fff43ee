//! Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::DepotExt as _,
    orders::{errors::into_api_error, models::OrderResponse},
    state::State,
};

/// Get Order Handler
#[endpoint(tags("orders"), summary = "Get Order")]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .get_order(id.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(order.into()))
}
