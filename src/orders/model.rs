use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer purchase record, loaded together with its line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Store-generated identifier
    pub id: Uuid,

    /// Customer who placed the order
    pub customer_id: i64,

    /// Total amount in USD
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Time the order was recorded
    pub created_at: DateTime<Utc>,

    /// Line items, in the order they were supplied at creation
    pub order_items: Vec<OrderItem>,
}

/// A line item belonging to exactly one order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub sku: String,
    pub quantity: i32,
}

/// Order data for insertion; the store assigns ids and the timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: i64,
    pub amount: Decimal,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub sku: String,
    pub quantity: i32,
}

impl NewOrderItem {
    pub fn new(sku: impl Into<String>, quantity: i32) -> Self {
        Self {
            sku: sku.into(),
            quantity,
        }
    }
}

/// Result of a successful `create_order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub success: bool,
    pub order_id: Uuid,
}

/// Result of `mark_as_refunded` on an existing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundOutcome {
    pub success: bool,
}

/// Result of a successful `find_order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundOrder {
    pub order: Order,
}
