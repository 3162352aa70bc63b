//! Tool system
//!
//! This module provides the registry of named, schema-described
//! operations that the MCP and HTTP surfaces dispatch into.

pub mod definition;
pub mod manager;
pub mod traits;

pub use definition::{ParamKind, ParamSpec, SchemaBuilder, ToolDefinition, ToolRequest};
pub use manager::ToolManager;
pub use traits::Tool;
