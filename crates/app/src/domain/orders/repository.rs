//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::orders::{
    data::{NewOrder, OrderUpdate},
    records::{OrderRecord, OrderStatus, OrderUuid},
};

const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const UPDATE_ORDER_SQL: &str = include_str!("sql/update_order.sql");
const DELETE_ORDER_SQL: &str = include_str!("sql/delete_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        order_id: &str,
        new: &NewOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(order_id)
            .bind(&new.customer_name)
            .bind(&new.product)
            .bind(new.quantity_or_default())
            .bind(OrderStatus::Pending.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        update: &OrderUpdate,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(update.status.map(OrderStatus::as_str))
            .bind(update.customer_name.as_deref())
            .bind(update.product.as_deref())
            .bind(update.quantity)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: OrderUuid::from(row.try_get::<uuid::Uuid, _>("uuid")?),
            order_id: row.try_get("order_id")?,
            customer_name: row.try_get("customer_name")?,
            product: row.try_get("product")?,
            quantity: row.try_get("quantity")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::orders::errors::OrdersServiceError, test::TestContext};

    use super::*;

    fn widget() -> NewOrder {
        NewOrder {
            customer_name: "Alice".to_string(),
            product: "Widget".to_string(),
            quantity: None,
        }
    }

    #[tokio::test]
    async fn duplicate_order_id_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let repository = PgOrdersRepository::new();
        let mut tx = ctx.db.begin().await;

        repository
            .create_order(&mut tx, OrderUuid::new(), "order-1", &widget())
            .await?;

        let result = repository
            .create_order(&mut tx, OrderUuid::new(), "order-1", &widget())
            .await
            .map_err(OrdersServiceError::from);

        assert!(
            matches!(result, Err(OrdersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_status_cannot_be_stored() -> TestResult {
        let ctx = TestContext::new().await;
        let mut tx = ctx.db.begin().await;

        let result = query(
            "INSERT INTO orders (uuid, order_id, customer_name, product, status) \
             VALUES ($1, 'order-2', 'Alice', 'Widget', 'Lost')",
        )
        .bind(OrderUuid::new().into_uuid())
        .execute(&mut *tx)
        .await
        .map_err(OrdersServiceError::from);

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn created_order_reads_back_unchanged() -> TestResult {
        let ctx = TestContext::new().await;
        let repository = PgOrdersRepository::new();
        let mut tx = ctx.db.begin().await;

        let created = repository
            .create_order(&mut tx, OrderUuid::new(), "order-3", &widget())
            .await?;

        let fetched = repository.get_order(&mut tx, created.uuid).await?;

        assert_eq!(fetched, created);

        Ok(())
    }
}
