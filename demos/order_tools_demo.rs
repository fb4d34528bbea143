//! Example: drive the order tools the way an agent orchestrator would
//!
//! Prints the tool declarations, then issues a create, find and refund call
//! against an in-memory store.
//!
//! # Running
//!
//! ```bash
//! cargo run --example order_tools_demo
//! ```

use std::sync::Arc;

use order_tools::orders::{OrderManagementTool, OrderService, CREATE_ORDER, FIND_ORDER, MARK_AS_REFUNDED};
use order_tools::store::InMemoryOrderStore;
use order_tools::tools::{FunctionRegistry, ToolExecutor};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    order_tools::telemetry::init();

    let service = Arc::new(OrderService::new(Arc::new(InMemoryOrderStore::new())));
    let mut registry = FunctionRegistry::new();
    OrderManagementTool::new(service).register(&mut registry)?;

    println!("=== Declared tools ===\n");
    for decl in registry.declarations() {
        println!("{}: {}", decl.name, decl.description);
        println!("{}\n", serde_json::to_string_pretty(&decl.input_schema)?);
    }

    let created = registry
        .execute(
            "call-1".to_string(),
            CREATE_ORDER.to_string(),
            json!({
                "customer_id": 42,
                "amount": 19.99,
                "order_items": [{ "sku": "ABC", "quantity": 2 }]
            }),
        )
        .await?;
    println!("create_order -> {}", created);

    let order_id = serde_json::from_str::<Value>(&created)?["order_id"].clone();

    let found = registry
        .execute("call-2".to_string(), FIND_ORDER.to_string(), json!({ "order_id": order_id }))
        .await?;
    println!("find_order -> {}", found);

    let refunded = registry
        .execute("call-3".to_string(), MARK_AS_REFUNDED.to_string(), json!({ "order_id": order_id }))
        .await?;
    println!("mark_as_refunded -> {}", refunded);

    match registry
        .execute("call-4".to_string(), FIND_ORDER.to_string(), json!({ "order_id": order_id }))
        .await
    {
        Ok(result) => println!("find_order -> {}", result),
        Err(message) => println!("find_order -> error: {}", message),
    }

    Ok(())
}
