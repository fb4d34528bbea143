//! Order persistence
//!
//! The facade talks to storage only through the [`OrderStore`] trait. Two
//! backends are provided: [`InMemoryOrderStore`] for tests and database-less
//! runs, and [`PostgresOrderStore`] backed by a deadpool-postgres pool.

pub mod error;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::orders::model::{NewOrder, Order};

pub use error::{Result, StoreError};
pub use memory::InMemoryOrderStore;
pub use postgres::{DatabaseConfig, PostgresOrderStore};

/// Storage operations backing the order facade
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert an order and all of its items atomically
    ///
    /// Returns the stored order with generated ids and timestamp, or `None` if the
    /// backend did not hand back the inserted record.
    async fn create_order(&self, order: NewOrder) -> Result<Option<Order>>;

    /// Fetch an order with its items
    async fn find_order(&self, id: Uuid) -> Result<Option<Order>>;

    /// Delete an order; its items are removed with it
    ///
    /// Returns `true` if a record was deleted.
    async fn delete_order(&self, id: Uuid) -> Result<bool>;
}
