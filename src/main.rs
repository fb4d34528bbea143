use std::sync::Arc;

use order_tools::config::ServiceConfig;
use order_tools::orders::{OrderManagementTool, OrderService};
use order_tools::routes::configure_routes;
use order_tools::store::{InMemoryOrderStore, OrderStore, PostgresOrderStore};
use order_tools::telemetry;
use order_tools::tools::FunctionRegistry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = ServiceConfig::from_env()?;

    let store: Arc<dyn OrderStore> = match &config.database {
        Some(database) => {
            let store = PostgresOrderStore::connect(database).await?;
            store.migrate().await?;
            tracing::info!(host = %database.host, database = %database.database, "Using PostgreSQL order store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, orders are kept in memory");
            Arc::new(InMemoryOrderStore::new())
        }
    };

    let service = Arc::new(OrderService::new(store));
    let mut registry = FunctionRegistry::new();
    OrderManagementTool::new(service).register(&mut registry)?;

    let routes = configure_routes(Arc::new(registry));

    tracing::info!("Starting server on http://{}", config.bind_addr);
    warp::serve(routes).run(config.bind_addr).await;

    Ok(())
}
