// POST /tools/{name} handler

use crate::models::{ToolCallRequest, ToolCallResponse};
use crate::tools::{FunctionRegistry, ToolExecutor};
use std::convert::Infallible;
use std::sync::Arc;
use uuid::Uuid;
use warp::http::StatusCode;

pub async fn call_tool_handler(
    name: String,
    request: ToolCallRequest,
    registry: Arc<FunctionRegistry>,
) -> Result<impl warp::Reply, Infallible> {
    tracing::info!(tool = %name, "POST /tools/{}", name);

    let status = if registry.contains(&name) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    let response = execute_tool_call(registry.as_ref(), name, request).await;

    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        status,
    ))
}

/// Run one tool call and wrap the outcome as a tool result
pub async fn execute_tool_call(
    executor: &dyn ToolExecutor,
    name: String,
    request: ToolCallRequest,
) -> ToolCallResponse {
    let tool_use_id = request
        .tool_use_id
        .unwrap_or_else(|| format!("call_{}", Uuid::new_v4().simple()));

    let result = executor
        .execute(tool_use_id.clone(), name, request.arguments)
        .await;

    ToolCallResponse::from_result(tool_use_id, result)
}
