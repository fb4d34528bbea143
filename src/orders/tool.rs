//! Agent-facing tool definitions for the order facade
//!
//! [`OrderManagementTool`] turns an [`OrderService`] into three declared tool
//! functions and installs them in a [`FunctionRegistry`]. Function names follow
//! the `<tool>__<function>` convention of the calling agent framework.
//!
//! At this boundary a success becomes a JSON object and a failure becomes the
//! plain message text (`"Order items cannot be empty"`, `"Order not found"`).

use std::sync::Arc;

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::model::NewOrderItem;
use super::service::OrderService;
use crate::tools::{
    create_tool_declaration, FunctionRegistry, RegistryError, ToolDeclaration, ToolRegistration,
};

/// Tool name prefixed to every function name
pub const TOOL_NAME: &str = "order_management";

pub const CREATE_ORDER: &str = "order_management__create_order";
pub const MARK_AS_REFUNDED: &str = "order_management__mark_as_refunded";
pub const FIND_ORDER: &str = "order_management__find_order";

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateOrderArgs {
    /// Customer ID
    #[serde(deserialize_with = "whole_number")]
    #[schemars(with = "f64")]
    pub customer_id: i64,

    /// List of order items that each contain 'sku' and 'quantity' properties
    #[serde(default)]
    pub order_items: Vec<OrderItemArgs>,

    /// Total amount (USD) of the order
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub amount: Decimal,
}

/// Order item
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OrderItemArgs {
    /// Product SKU
    pub sku: String,

    /// Quantity of the product
    #[serde(deserialize_with = "whole_number")]
    #[schemars(with = "f64")]
    pub quantity: i32,
}

/// Accept any JSON number without a fractional part, so `2` and `2.0` both
/// deserialize to an integer field declared as `number`
fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
    T::Error: std::fmt::Display,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    let value = match number.as_i64() {
        Some(value) => value,
        None => match number.as_f64() {
            Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => value as i64,
            _ => return Err(D::Error::custom(format!("expected a whole number, found {}", number))),
        },
    };
    T::try_from(value).map_err(D::Error::custom)
}

impl From<OrderItemArgs> for NewOrderItem {
    fn from(item: OrderItemArgs) -> Self {
        NewOrderItem::new(item.sku, item.quantity)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OrderIdArgs {
    /// Order ID
    pub order_id: String,
}

/// Registration object exposing an [`OrderService`] to an agent orchestrator
#[derive(Clone)]
pub struct OrderManagementTool {
    service: Arc<OrderService>,
}

impl OrderManagementTool {
    pub fn new(service: Arc<OrderService>) -> Self {
        Self { service }
    }

    /// Declarations for the three order functions
    pub fn declarations() -> Vec<ToolDeclaration> {
        vec![
            create_order_declaration(),
            mark_as_refunded_declaration(),
            find_order_declaration(),
        ]
    }

    /// Callable registrations, each paired with its declaration
    pub fn registrations(&self) -> Vec<ToolRegistration> {
        let service = self.service.clone();
        let create = ToolRegistration::new_async(create_order_declaration(), move |args: CreateOrderArgs| {
            let service = service.clone();
            async move {
                let items = args.order_items.into_iter().map(NewOrderItem::from).collect();
                service
                    .create_order(args.customer_id, args.amount, items)
                    .await
                    .map_err(|e| e.to_string())
            }
        });

        let service = self.service.clone();
        let refund = ToolRegistration::new_async(mark_as_refunded_declaration(), move |args: OrderIdArgs| {
            let service = service.clone();
            async move {
                service
                    .mark_as_refunded(&args.order_id)
                    .await
                    .map_err(|e| e.to_string())
            }
        });

        let service = self.service.clone();
        let find = ToolRegistration::new_async(find_order_declaration(), move |args: OrderIdArgs| {
            let service = service.clone();
            async move {
                service
                    .find_order(&args.order_id)
                    .await
                    .map_err(|e| e.to_string())
            }
        });

        vec![create, refund, find]
    }

    /// Install all order functions in `registry`
    pub fn register(&self, registry: &mut FunctionRegistry) -> Result<(), RegistryError> {
        for registration in self.registrations() {
            registry.register(registration)?;
        }
        Ok(())
    }
}

fn create_order_declaration() -> ToolDeclaration {
    // Omitted items fall through to the empty-items validation message
    create_tool_declaration::<CreateOrderArgs>(
        CREATE_ORDER,
        "Order Management Service: Create a new order",
    )
    .with_required_parameter("order_items")
}

fn mark_as_refunded_declaration() -> ToolDeclaration {
    create_tool_declaration::<OrderIdArgs>(
        MARK_AS_REFUNDED,
        "Order Management Service: Mark order as refunded",
    )
}

fn find_order_declaration() -> ToolDeclaration {
    create_tool_declaration::<OrderIdArgs>(FIND_ORDER, "Order Management Service: Find order by ID")
}
