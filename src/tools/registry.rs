//! Function registry for tool execution

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::executor::ToolExecutor;
use super::types::ToolDeclaration;

/// Type alias for boxed async functions
type AsyncToolFn = Box<
    dyn Fn(serde_json::Value) -> BoxFuture<'static, Result<String, String>> + Send + Sync,
>;

/// Errors raised while populating a registry
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A function with the same name is already registered
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),
}

/// A callable tool together with the declaration advertised to the model
pub struct ToolRegistration {
    pub name: String,
    pub declaration: ToolDeclaration,
    function: AsyncToolFn,
}

impl ToolRegistration {
    /// Build a registration from an async function and its declaration
    ///
    /// The registration name is taken from the declaration so the two can never
    /// disagree.
    pub fn new_async<F, Args, R, Fut>(declaration: ToolDeclaration, func: F) -> Self
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Args: DeserializeOwned + Send + 'static,
        R: Serialize + Send + 'static,
        Fut: Future<Output = Result<R, String>> + Send + 'static,
    {
        Self {
            name: declaration.name.clone(),
            function: wrap_async(func),
            declaration,
        }
    }
}

fn wrap_async<F, Args, R, Fut>(func: F) -> AsyncToolFn
where
    F: Fn(Args) -> Fut + Send + Sync + 'static,
    Args: DeserializeOwned + Send + 'static,
    R: Serialize + Send + 'static,
    Fut: Future<Output = Result<R, String>> + Send + 'static,
{
    Box::new(move |args_json: serde_json::Value| {
        let args = match serde_json::from_value::<Args>(args_json) {
            Ok(args) => args,
            Err(e) => {
                let err_msg = format!("Failed to deserialize arguments: {}", e);
                return Box::pin(async move { Err(err_msg) }) as BoxFuture<'static, _>;
            }
        };

        let future = func(args);

        Box::pin(async move {
            match future.await {
                Ok(result) => serde_json::to_string(&result)
                    .map_err(|e| format!("Failed to serialize result: {}", e)),
                Err(e) => Err(e),
            }
        }) as BoxFuture<'static, _>
    })
}

/// Registry for managing tool functions
///
/// The `FunctionRegistry` holds the Rust functions an agent may call together with
/// the declarations describing them. It handles deserialization of arguments from
/// JSON and serialization of results back to JSON.
///
/// # Example
///
/// ```
/// use order_tools::tools::{FunctionRegistry, ToolDeclaration, ToolRegistration};
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Deserialize)]
/// struct EchoArgs {
///     text: String,
/// }
///
/// #[derive(Serialize)]
/// struct EchoResult {
///     text: String,
/// }
///
/// let declaration = ToolDeclaration {
///     name: "echo".to_string(),
///     description: "Echo the text back".to_string(),
///     input_schema: json!({ "type": "object" }),
/// };
///
/// let mut registry = FunctionRegistry::new();
/// registry
///     .register(ToolRegistration::new_async(declaration, |args: EchoArgs| async move {
///         Ok(EchoResult { text: args.text })
///     }))
///     .unwrap();
/// assert!(registry.contains("echo"));
/// ```
pub struct FunctionRegistry {
    functions: HashMap<String, AsyncToolFn>,
    declarations: HashMap<String, ToolDeclaration>,
}

impl FunctionRegistry {
    /// Create a new empty function registry
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            declarations: HashMap::new(),
        }
    }

    /// Register a tool function together with its declaration
    ///
    /// Fails if a function with the same name is already present.
    pub fn register(&mut self, registration: ToolRegistration) -> Result<(), RegistryError> {
        if self.functions.contains_key(&registration.name) {
            return Err(RegistryError::DuplicateTool(registration.name));
        }

        self.declarations
            .insert(registration.name.clone(), registration.declaration);
        self.functions.insert(registration.name, registration.function);
        Ok(())
    }

    /// Check if a function is registered
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Get the number of registered functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Declarations of every registered tool, sorted by name
    pub fn declarations(&self) -> Vec<ToolDeclaration> {
        let mut declarations: Vec<ToolDeclaration> = self.declarations.values().cloned().collect();
        declarations.sort_by(|a, b| a.name.cmp(&b.name));
        declarations
    }

    async fn execute_function(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<String, String> {
        match self.functions.get(name) {
            Some(func) => func(arguments).await,
            None => Err(format!("Unknown tool: {}", name)),
        }
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutor for FunctionRegistry {
    async fn execute(
        &self,
        tool_use_id: String,
        name: String,
        arguments: serde_json::Value,
    ) -> Result<String, String> {
        tracing::debug!(tool_use_id = %tool_use_id, tool = %name, "Executing tool call");
        let result = self.execute_function(&name, arguments).await;
        if let Err(e) = &result {
            tracing::debug!(tool_use_id = %tool_use_id, tool = %name, error = %e, "Tool call failed");
        }
        result
    }
}
