//! PostgreSQL order store
//!
//! Orders and their items live in two tables, `orders` and `order_items`, with
//! `ON DELETE CASCADE` on the item foreign key. [`PostgresOrderStore::migrate`]
//! creates both idempotently.

pub mod connection;
pub mod store;

pub use connection::DatabaseConfig;
pub use store::PostgresOrderStore;
