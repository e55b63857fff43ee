//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    database::Db,
    domain::orders::{
        data::{NewOrder, OrderUpdate},
        errors::OrdersServiceError,
        records::{OrderRecord, OrderUuid},
        repository::PgOrdersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        order.validate()?;

        let mut tx = self.db.begin().await?;

        let order_id = Uuid::new_v4().to_string();

        let created = self
            .repository
            .create_order(&mut tx, OrderUuid::new(), &order_id, &order)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_order(
        &self,
        order: OrderUuid,
        update: OrderUpdate,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_order(&mut tx, order, &update).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves all orders, newest first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order by its record identifier.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Creates a new `Pending` order with a freshly generated order id.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Applies the fields present in `update` to an existing order.
    async fn update_order(
        &self,
        order: OrderUuid,
        update: OrderUpdate,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Deletes an order.
    async fn delete_order(&self, order: OrderUuid) -> Result<(), OrdersServiceError>;
}
