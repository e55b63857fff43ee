//! Per-test Postgres databases inside one shared container.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool, Postgres, Transaction};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

const USER: &str = "tracker_test";
const PASSWORD: &str = "tracker_test_password";

static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Database names queued for dropping once their `TestDb` goes away.
static DROP_QUEUE: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

/// Only generated names are ever dropped; anything else is refused.
fn is_test_database_name(name: &str) -> bool {
    name.starts_with("tracker_test_")
        && name.len() <= 63
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("tracker_test")
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn database_url(database: &str) -> String {
    let container = POSTGRES_CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}")
}

async fn start_drop_worker() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if !is_test_database_name(&name) {
                continue;
            }

            if let Ok(mut conn) = PgConnection::connect(&database_url("postgres").await).await {
                let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
                    .execute(&mut conn)
                    .await;
                let _ = conn.close().await;
            }
        }
    });

    sender
}

/// A freshly migrated database, dropped when this value is.
///
/// Services commit normally; isolation comes from every test owning its own database.
#[derive(Debug)]
pub(crate) struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROP_QUEUE.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub(crate) async fn new() -> Self {
        DROP_QUEUE.get_or_init(start_drop_worker).await;

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock before epoch")
            .as_nanos();

        let name = format!("tracker_test_{nanos}_{}", uuid::Uuid::new_v4().simple());
        let name = name[..name.len().min(63)].to_string();

        let mut admin = PgConnection::connect(&database_url("postgres").await)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("Failed to create test database");

        admin
            .close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&database_url(&name).await)
            .await
            .expect("Failed to create pool for database");

        crate::database::migrate(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool, name }
    }

    /// Begin a transaction that rolls back when dropped.
    pub(crate) async fn begin(&self) -> Transaction<'static, Postgres> {
        self.pool
            .begin()
            .await
            .expect("Failed to start test transaction")
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_generated_names_are_droppable() {
        assert!(is_test_database_name("tracker_test_123_abc"));
        assert!(!is_test_database_name("postgres"));
        assert!(!is_test_database_name("tracker_test_x\"; DROP"));
        assert!(!is_test_database_name(&format!("tracker_test_{}", "a".repeat(60))));
    }

    #[tokio::test]
    async fn migrated_database_has_empty_orders_table() {
        let test_db = TestDb::new().await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(test_db.pool())
            .await
            .expect("Failed to count orders");

        assert_eq!(count, 0);
    }
}
