//! Tool manager for registering and dispatching tools

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use serde_json::{Map, Value as JsonValue};
use tracing::{debug, warn};

use crate::params::check_required;
use crate::tool::{Tool, ToolDefinition, ToolRequest};
use crate::{Error, Result};

/// Manager for registered tools
///
/// Built once at startup, then shared read-only behind an `Arc`.
pub struct ToolManager {
    /// Registered tools indexed by name
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolManager {
    /// Create a new empty tool manager
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    ///
    /// If a tool with the same name already exists, it will be replaced.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_some() {
            warn!(tool = %name, "Replacing previously registered tool");
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Get all registered tool definitions, ordered by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self.tools.values().map(|t| t.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute a tool by name
    ///
    /// `input` may be `null` (no arguments) or a JSON object; required
    /// parameters are checked before the tool runs.
    ///
    /// # Errors
    /// `ToolNotFound` for an unknown name, `InvalidArgument` for malformed
    /// input, otherwise whatever the tool returns
    pub async fn execute(&self, name: &str, input: JsonValue) -> Result<JsonValue> {
        let tool = self
            .get(name)
            .ok_or_else(|| Error::ToolNotFound(name.to_string()))?;

        let input = match input {
            JsonValue::Null => JsonValue::Object(Map::new()),
            JsonValue::Object(map) => JsonValue::Object(map),
            other => {
                return Err(Error::InvalidArgument(format!(
                    "arguments for '{}' must be a JSON object, got {}",
                    name,
                    json_type_name(&other)
                )));
            }
        };

        if let Some(map) = input.as_object() {
            check_required(&tool.params(), map)?;
        }

        debug!(tool = name, input = %input, "Dispatching tool");
        let started = Instant::now();
        let result = tool.execute(input).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => debug!(tool = name, elapsed_ms, "Tool completed"),
            Err(e) => warn!(tool = name, elapsed_ms, error = %e, "Tool failed"),
        }

        result
    }

    /// Execute a tool invocation request
    pub async fn dispatch(&self, request: ToolRequest) -> Result<JsonValue> {
        self.execute(&request.name, request.arguments).await
    }

    /// Check if a tool is registered
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if no tools are registered
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get all registered tool names, sorted
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
