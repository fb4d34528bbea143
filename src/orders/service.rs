use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::error::OrderError;
use super::model::{FoundOrder, NewOrder, NewOrderItem, OrderCreated, RefundOutcome};
use crate::store::{OrderStore, StoreError};

/// Facade exposing create, refund and find operations over an [`OrderStore`]
///
/// Every operation returns a tagged result: a structured payload on success,
/// an [`OrderError`] otherwise. Nothing here panics on a missing record.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Create an order together with its items
    ///
    /// The item list must be non-empty, every quantity positive and the amount
    /// non-negative; violations are rejected before anything is written. The
    /// order and its items are stored in one atomic store operation.
    pub async fn create_order(
        &self,
        customer_id: i64,
        amount: Decimal,
        order_items: Vec<NewOrderItem>,
    ) -> Result<OrderCreated, OrderError> {
        info!(customer_id, items = order_items.len(), "Creating order");

        if let Err(e) = validate(amount, &order_items) {
            warn!(customer_id, error = %e, "Rejected order");
            return Err(e);
        }

        let new_order = NewOrder {
            customer_id,
            amount,
            items: order_items,
        };

        let order = self
            .store
            .create_order(new_order)
            .await
            .map_err(|e| {
                error!(customer_id, error = %e, "Failed to store order");
                OrderError::from(e)
            })?
            .ok_or(OrderError::NotFound)?;

        info!(customer_id, order_id = %order.id, "Created order");

        Ok(OrderCreated {
            success: true,
            order_id: order.id,
        })
    }

    /// Refund an order
    ///
    /// A refund deletes the order and its items outright; no refund record is
    /// kept.
    pub async fn mark_as_refunded(&self, order_id: &str) -> Result<RefundOutcome, OrderError> {
        info!(order_id, "Refunding order");

        let id = parse_order_id(order_id)?;

        let order = self
            .store
            .find_order(id)
            .await
            .map_err(|e| store_failure(order_id, e))?
            .ok_or(OrderError::NotFound)?;

        let success = self
            .store
            .delete_order(order.id)
            .await
            .map_err(|e| store_failure(order_id, e))?;

        if !success {
            warn!(order_id, "Order disappeared before it could be deleted");
        }

        Ok(RefundOutcome { success })
    }

    /// Look up an order and its items
    pub async fn find_order(&self, order_id: &str) -> Result<FoundOrder, OrderError> {
        info!(order_id, "Looking up order");

        let id = parse_order_id(order_id)?;

        let order = self
            .store
            .find_order(id)
            .await
            .map_err(|e| store_failure(order_id, e))?
            .ok_or(OrderError::NotFound)?;

        Ok(FoundOrder { order })
    }
}

fn store_failure(order_id: &str, err: StoreError) -> OrderError {
    error!(order_id, error = %err, "Order store failure");
    OrderError::Store(err)
}

fn validate(amount: Decimal, order_items: &[NewOrderItem]) -> Result<(), OrderError> {
    if order_items.is_empty() {
        return Err(OrderError::EmptyOrderItems);
    }

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(OrderError::InvalidOrder(
            "Order amount cannot be negative".to_string(),
        ));
    }

    if let Some(item) = order_items.iter().find(|item| item.quantity <= 0) {
        return Err(OrderError::InvalidOrder(format!(
            "Quantity must be positive for SKU {}",
            item.sku
        )));
    }

    Ok(())
}

/// An id that does not parse cannot name a stored order
fn parse_order_id(order_id: &str) -> Result<Uuid, OrderError> {
    Uuid::parse_str(order_id.trim()).map_err(|_| OrderError::NotFound)
}
