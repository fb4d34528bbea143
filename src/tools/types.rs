//! Types shared between tool declarations and tool execution

use serde::{Deserialize, Serialize};

/// Declaration of a tool function available to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDeclaration {
    /// Function name
    pub name: String,
    /// What the function does
    pub description: String,
    /// JSON Schema for parameters
    pub input_schema: serde_json::Value,
}

impl ToolDeclaration {
    /// Names of the parameters marked as required in the input schema
    pub fn required_parameters(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(|required| required.as_array())
            .map(|required| required.iter().filter_map(|name| name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Mark `parameter` as required even when the argument type gives it a default
    pub fn with_required_parameter(mut self, parameter: &str) -> Self {
        if let Some(schema) = self.input_schema.as_object_mut() {
            let required = schema
                .entry("required")
                .or_insert_with(|| serde_json::Value::Array(Vec::new()));
            if let Some(required) = required.as_array_mut() {
                if !required.iter().any(|name| name == parameter) {
                    required.push(serde_json::Value::from(parameter));
                }
            }
        }
        self
    }
}
