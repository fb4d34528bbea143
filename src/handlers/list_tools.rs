// GET /tools and GET /health handlers

use crate::models::HealthResponse;
use crate::tools::FunctionRegistry;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;

pub async fn list_tools_handler(registry: Arc<FunctionRegistry>) -> Result<impl warp::Reply, Infallible> {
    tracing::debug!(tools = registry.len(), "GET /tools");

    Ok(warp::reply::with_status(
        warp::reply::json(&registry.declarations()),
        StatusCode::OK,
    ))
}

pub async fn health_handler() -> Result<impl warp::Reply, Infallible> {
    let response = HealthResponse {
        status: "ok".to_string(),
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        StatusCode::OK,
    ))
}
