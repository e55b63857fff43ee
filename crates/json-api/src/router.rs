//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    catch_panic::CatchPanic,
    cors::{self, Cors},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{chatbot, errors, healthcheck, observability, orders, state::State};

/// Routes under `/api`.
fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(orders::get::handler)
                        .put(orders::update::handler)
                        .delete(orders::delete::handler),
                ),
        )
        .push(Router::with_path("chatbot").post(chatbot::relay::handler))
}

/// Every route the server answers, with state and middleware attached.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(api_router())
}

/// Wrap a router in a service that answers CORS for any origin and renders every error as JSON.
pub(crate) fn service(router: Router) -> Service {
    let cors = Cors::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
        .into_handler();

    Service::new(router).hoop(cors).catcher(errors::catcher())
}
