//! Orders Data

use crate::domain::orders::{errors::OrdersServiceError, records::OrderStatus};

/// Quantity stored when a new order does not provide one.
pub const DEFAULT_QUANTITY: i32 = 1;

/// New Order Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_name: String,
    pub product: String,
    pub quantity: Option<i32>,
}

impl NewOrder {
    /// Check the fields every order must carry.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::MissingRequiredData`] when the customer name or the
    /// product is blank.
    pub fn validate(&self) -> Result<(), OrdersServiceError> {
        if self.customer_name.trim().is_empty() || self.product.trim().is_empty() {
            return Err(OrdersServiceError::MissingRequiredData);
        }

        Ok(())
    }

    #[must_use]
    pub fn quantity_or_default(&self) -> i32 {
        self.quantity.unwrap_or(DEFAULT_QUANTITY)
    }
}

/// Order Update Data
///
/// Only fields that are `Some` are written; everything else keeps its stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub customer_name: Option<String>,
    pub product: Option<String>,
    pub quantity: Option<i32>,
}

impl OrderUpdate {
    #[must_use]
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
