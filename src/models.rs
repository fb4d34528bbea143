// Request and response bodies of the HTTP surface

use serde::{Deserialize, Serialize};

// POST /api/v1/tools/{name} request
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallRequest {
    /// Caller-supplied id echoed in the response; generated when absent
    #[serde(default)]
    pub tool_use_id: Option<String>,

    #[serde(default = "empty_arguments")]
    pub arguments: serde_json::Value,
}

fn empty_arguments() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

// Tool call result, shaped like a tool_result content block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCallResponse {
    pub tool_use_id: String,
    pub content: String,
    pub is_error: bool,
}

impl ToolCallResponse {
    pub fn from_result(tool_use_id: String, result: Result<String, String>) -> Self {
        match result {
            Ok(content) => Self {
                tool_use_id,
                content,
                is_error: false,
            },
            Err(content) => Self {
                tool_use_id,
                content,
                is_error: true,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_call_request_defaults() {
        let request: ToolCallRequest = serde_json::from_str("{}").unwrap();
        assert!(request.tool_use_id.is_none());
        assert_eq!(request.arguments, json!({}));
    }

    #[test]
    fn test_tool_call_request_deserialization() {
        let request: ToolCallRequest = serde_json::from_value(json!({
            "tool_use_id": "toolu_1",
            "arguments": { "order_id": "abc" }
        }))
        .unwrap();

        assert_eq!(request.tool_use_id.as_deref(), Some("toolu_1"));
        assert_eq!(request.arguments["order_id"], "abc");
    }

    #[test]
    fn test_tool_call_response_from_result() {
        let ok = ToolCallResponse::from_result("a".to_string(), Ok(r#"{"success":true}"#.to_string()));
        assert!(!ok.is_error);
        assert_eq!(ok.content, r#"{"success":true}"#);

        let err = ToolCallResponse::from_result("b".to_string(), Err("Order not found".to_string()));
        assert!(err.is_error);
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({ "tool_use_id": "b", "content": "Order not found", "is_error": true })
        );
    }
}
