//! Routes `tracing` events from the API client to the browser console.

use tracing::Level;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Request and response lines from the API client are logged at debug.
const MAX_LEVEL: Level = Level::DEBUG;

#[cfg(target_arch = "wasm32")]
pub(crate) fn init() -> Result<(), TryInitError> {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(MAX_LEVEL)
        .build();

    tracing_subscriber::registry()
        .with(tracing_wasm::WASMLayer::new(config))
        .try_init()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn init() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::from_level(MAX_LEVEL))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
}
