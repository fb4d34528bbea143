// Route definitions

use crate::handlers;
use crate::tools::FunctionRegistry;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

pub fn configure_routes(
    registry: Arc<FunctionRegistry>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let api = warp::path("api").and(warp::path("v1"));

    // GET /health
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::health_handler);

    // GET /api/v1/tools
    let list_tools = api
        .and(warp::path("tools"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_registry(registry.clone()))
        .and_then(handlers::list_tools_handler);

    // POST /api/v1/tools/{name}
    let call_tool = api
        .and(warp::path("tools"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_registry(registry))
        .and_then(handlers::call_tool_handler);

    health.or(list_tools).or(call_tool)
}

fn with_registry(
    registry: Arc<FunctionRegistry>,
) -> impl Filter<Extract = (Arc<FunctionRegistry>,), Error = Infallible> + Clone {
    warp::any().map(move || registry.clone())
}
