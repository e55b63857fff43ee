//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        chatbot::{ChatbotConfig, ChatbotService, HttpChatbotService},
        orders::{OrdersService, PgOrdersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub orders: Arc<dyn OrdersService>,
    pub chatbot: Arc<dyn ChatbotService>,
}

impl AppContext {
    /// Build application context from database settings and chatbot settings.
    ///
    /// Pending migrations are applied before any service is handed out.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_config(
        database_url: &str,
        max_connections: u32,
        chatbot: ChatbotConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(database_url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        Ok(Self {
            orders: Arc::new(PgOrdersService::new(Db::new(pool))),
            chatbot: Arc::new(HttpChatbotService::new(chatbot)),
        })
    }
}
