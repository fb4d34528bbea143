// Handlers module

pub mod call_tool;
pub mod list_tools;

pub use call_tool::{call_tool_handler, execute_tool_call};
pub use list_tools::{health_handler, list_tools_handler};
