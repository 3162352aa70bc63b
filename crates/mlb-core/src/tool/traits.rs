//! Tool trait definition
//!
//! Defines the core trait for implementing tools that can be
//! invoked through MCP `tools/call` or the REST surface.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::tool::definition::{ParamSpec, SchemaBuilder, ToolDefinition};
use crate::Result;

/// Tool trait
///
/// Implement this trait to expose an operation through the gateway.
/// Tools are stateless: every invocation is independent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool name (unique within a registry)
    fn name(&self) -> &str;

    /// Get the tool description (shown to the AI client when selecting tools)
    fn description(&self) -> &str;

    /// Typed parameter declarations
    fn params(&self) -> Vec<ParamSpec>;

    /// HTTP path the REST surface mounts this tool under.
    ///
    /// Path parameters use axum's `{name}` syntax.
    fn http_path(&self) -> String {
        format!("/tools/{}", self.name())
    }

    /// Get the JSON schema for the tool's input parameters
    fn input_schema(&self) -> JsonValue {
        SchemaBuilder::object_schema(&self.params())
    }

    /// Static descriptor of this tool
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
            http_path: self.http_path(),
        }
    }

    /// Execute the tool with the given input
    ///
    /// # Arguments
    /// * `input` - JSON object containing the tool input parameters
    ///
    /// # Returns
    /// A JSON-serializable response, or an error that the transport
    /// reports as a tool-invocation failure
    async fn execute(&self, input: JsonValue) -> Result<JsonValue>;
}
