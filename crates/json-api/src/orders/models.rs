//! Order Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tracker_app::domain::orders::records::{OrderRecord, OrderStatus};

/// Delivery status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) enum OrderStatusBody {
    Pending,
    Shipped,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
}

impl From<OrderStatusBody> for OrderStatus {
    fn from(status: OrderStatusBody) -> Self {
        match status {
            OrderStatusBody::Pending => OrderStatus::Pending,
            OrderStatusBody::Shipped => OrderStatus::Shipped,
            OrderStatusBody::OutForDelivery => OrderStatus::OutForDelivery,
            OrderStatusBody::Delivered => OrderStatus::Delivered,
        }
    }
}

impl From<OrderStatus> for OrderStatusBody {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => OrderStatusBody::Pending,
            OrderStatus::Shipped => OrderStatusBody::Shipped,
            OrderStatus::OutForDelivery => OrderStatusBody::OutForDelivery,
            OrderStatus::Delivered => OrderStatusBody::Delivered,
        }
    }
}

/// Order Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    /// Record identifier used in `/api/orders/{id}`
    pub id: Uuid,

    /// Customer-facing order number
    pub order_id: String,

    pub customer_name: String,

    pub product: String,

    pub quantity: i32,

    pub status: OrderStatusBody,

    /// The date and time the order was placed
    pub created_at: String,

    /// The date and time the order was last changed
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            id: order.uuid.into_uuid(),
            order_id: order.order_id,
            customer_name: order.customer_name,
            product: order.product,
            quantity: order.quantity,
            status: order.status.into(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Plain confirmation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use tracker_app::domain::orders::records::OrderUuid;

    use super::*;

    #[test]
    fn status_body_uses_display_names() -> Result<(), serde_json::Error> {
        assert_eq!(
            serde_json::to_string(&OrderStatusBody::OutForDelivery)?,
            "\"Out for Delivery\""
        );
        assert_eq!(
            serde_json::from_str::<OrderStatusBody>("\"Shipped\"")?,
            OrderStatusBody::Shipped
        );
        assert!(serde_json::from_str::<OrderStatusBody>("\"Lost\"").is_err());

        Ok(())
    }

    #[test]
    fn status_body_matches_domain_status() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from(OrderStatusBody::from(status)), status);
        }
    }

    #[test]
    fn order_response_is_camel_case() -> Result<(), serde_json::Error> {
        let uuid = OrderUuid::new();

        let response = OrderResponse::from(OrderRecord {
            uuid,
            order_id: "abc".to_string(),
            customer_name: "Alice".to_string(),
            product: "Widget".to_string(),
            quantity: 1,
            status: OrderStatus::Pending,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        });

        let json = serde_json::to_value(&response)?;

        assert_eq!(json["id"], serde_json::json!(uuid.into_uuid()));
        assert_eq!(json["orderId"], "abc");
        assert_eq!(json["customerName"], "Alice");
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");

        Ok(())
    }
}
