use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{OrderStore, Result};
use crate::orders::model::{NewOrder, Order, OrderItem};

/// Order store kept entirely in process memory
///
/// An order and its items live in one map entry, so creation and deletion are
/// atomic with respect to concurrent readers.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Number of stored order items across all orders
    pub async fn item_count(&self) -> usize {
        self.orders
            .read()
            .await
            .values()
            .map(|order| order.order_items.len())
            .sum()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create_order(&self, order: NewOrder) -> Result<Option<Order>> {
        let id = Uuid::new_v4();
        let order_items = order
            .items
            .into_iter()
            .map(|item| OrderItem {
                id: Uuid::new_v4(),
                order_id: id,
                sku: item.sku,
                quantity: item.quantity,
            })
            .collect();

        let stored = Order {
            id,
            customer_id: order.customer_id,
            amount: order.amount,
            created_at: Utc::now(),
            order_items,
        };

        self.orders.write().await.insert(id, stored.clone());
        Ok(Some(stored))
    }

    async fn find_order(&self, id: Uuid) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn delete_order(&self, id: Uuid) -> Result<bool> {
        Ok(self.orders.write().await.remove(&id).is_some())
    }
}
