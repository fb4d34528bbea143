//! Tool execution framework
//!
//! This module provides the infrastructure an agent orchestrator needs to call
//! Rust functions as tools: the `ToolDeclaration` advertised to the model, the
//! `ToolExecutor` trait, and the `FunctionRegistry` that stores and runs the
//! registered functions.

pub mod declaration;
pub mod executor;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use declaration::create_tool_declaration;
pub use executor::ToolExecutor;
pub use registry::{FunctionRegistry, RegistryError, ToolRegistration};
pub use types::ToolDeclaration;
