//! Order management
//!
//! [`OrderService`] is the facade with the three order operations (create,
//! refund, find). [`OrderManagementTool`] exposes it to an agent orchestrator
//! as declared tool functions.

pub mod error;
pub mod model;
pub mod service;
pub mod tool;

pub use error::{ErrorKind, OrderError};
pub use model::{FoundOrder, NewOrder, NewOrderItem, Order, OrderCreated, OrderItem, RefundOutcome};
pub use service::OrderService;
pub use tool::{OrderManagementTool, CREATE_ORDER, FIND_ORDER, MARK_AS_REFUNDED, TOOL_NAME};
