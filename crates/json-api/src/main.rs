//! Order Tracker JSON API Server

use std::{process, time::Duration};

use salvo::{
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
};
use tracing::{error, info};

use tracker_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod chatbot;
mod config;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod orders;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Extra time on top of the chat upstream timeout before shutdown stops waiting.
const SHUTDOWN_MARGIN: Duration = Duration::from_secs(5);

/// Order Tracker JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, so there is nowhere else to report it"
        )]
        {
            eprintln!("Failed to initialize logging: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();
    let grace = Duration::from_secs(config.chatbot.chatbot_timeout_seconds) + SHUTDOWN_MARGIN;

    info!(%addr, model = %config.chatbot.chatbot_model, "starting server");

    let app = match AppContext::from_config(
        &config.database.database_url,
        config.database.database_max_connections,
        config.chatbot.into_chatbot_config(),
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error:?}");

            process::exit(1);
        }
    };

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let routes = router::app_router(State::from_app_context(app));

    let doc = OpenApi::new("Order Tracker API", env!("CARGO_PKG_VERSION")).merge_router(&routes);

    let routes = routes
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router::service(routes)).await;
}
