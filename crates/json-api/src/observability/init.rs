//! Observability start-up.

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, settings};

/// Apply request-tracking settings and install the global tracing subscriber.
pub(crate) fn init(config: &ServerConfig) -> Result<(), ObservabilityError> {
    settings::apply_runtime_config(config);

    logging::init_subscriber(config)
}
