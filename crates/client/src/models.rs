//! Wire models

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shown when a chat reply carries no usable text.
pub const NO_RESPONSE: &str = "No response received";

/// Delivery status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Not yet shipped
    Pending,
    /// Handed to the carrier
    Shipped,
    /// On the last leg
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    /// Received by the customer
    Delivered,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Shipped,
        Self::OutForDelivery,
        Self::Delivered,
    ];

    /// Label used on the wire and in the UI.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label that is not one of the four statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// An order as the API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Record identifier used in order URLs
    pub id: Uuid,
    /// Human-facing order number
    pub order_id: String,
    /// Who placed the order
    pub customer_name: String,
    /// What was ordered
    pub product: String,
    /// How many
    pub quantity: i32,
    /// Where the order is
    pub status: OrderStatus,
    /// RFC 3339 creation time
    pub created_at: String,
    /// RFC 3339 time of the last write
    pub updated_at: String,
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Who placed the order
    pub customer_name: String,
    /// What was ordered
    pub product: String,
    /// Defaults to 1 on the server when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
}

/// Body of an update request; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// New customer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// New product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// New quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
}

impl OrderUpdate {
    /// Change only the status.
    #[must_use]
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Acknowledgement carrying only a message, as returned by delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub message: &'a str,
}

/// A chat relay answer.
///
/// The server repeats the reply under three names; all are optional here so partial
/// or older payloads still decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Preferred copy of the answer
    #[serde(default)]
    pub reply: Option<String>,
    /// Second copy
    #[serde(default)]
    pub response: Option<String>,
    /// Last resort copy
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatReply {
    /// The first non-empty of `reply`, `response` and `message`.
    pub fn preferred_text(&self) -> &str {
        [&self.reply, &self.response, &self.message]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|text| !text.is_empty())
            .unwrap_or(NO_RESPONSE)
    }
}

/// Error body the server sends with every failure.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: String,
}
