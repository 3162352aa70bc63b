//! MCP server handler
//!
//! Exposes the tool registry through rmcp's `ServerHandler`:
//! `tools/list` returns every registered tool, `tools/call` dispatches.

use std::sync::Arc;

use mlb_core::{Error, ToolManager, ToolRequest};
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, Content, Implementation, JsonObject,
        ListToolsResult, PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool as McpTool,
    },
    service::RequestContext,
};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

/// Server name advertised during initialization
pub const SERVER_NAME: &str = "mlb-gateway";

const INSTRUCTIONS: &str = "MLB statistics tools backed by the public MLB Stats API. \
    Use get_mlb_search_players / get_mlb_search_teams to resolve names to ids, \
    get_current_date to resolve relative dates, then query standings, schedules, \
    boxscores, player stats and sabermetrics by id.";

/// MCP server over a shared tool registry
#[derive(Clone)]
pub struct McpServer {
    tools: Arc<ToolManager>,
}

impl McpServer {
    pub fn new(tools: Arc<ToolManager>) -> Self {
        Self { tools }
    }

    /// The underlying registry
    pub fn tools(&self) -> &Arc<ToolManager> {
        &self.tools
    }

    /// Registry descriptors converted to MCP tool metadata
    pub fn tool_list(&self) -> Vec<McpTool> {
        self.tools
            .definitions()
            .into_iter()
            .map(|def| {
                let schema: JsonObject = match def.input_schema {
                    JsonValue::Object(obj) => obj,
                    _ => JsonObject::new(),
                };
                McpTool::new(def.name, def.description, Arc::new(schema))
            })
            .collect()
    }

    /// Dispatch a `tools/call`
    ///
    /// Unknown tools are protocol errors; argument and upstream failures
    /// come back as a tool result with `is_error` set so the client can
    /// read the message.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let input = arguments.map(JsonValue::Object).unwrap_or(JsonValue::Null);

        match self.tools.dispatch(ToolRequest::new(name, input)).await {
            Ok(value) => {
                let text = serde_json::to_string_pretty(&value).map_err(|e| {
                    McpError::internal_error(format!("Failed to serialize result: {}", e), None)
                })?;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(Error::ToolNotFound(tool)) => {
                warn!(tool = %tool, "MCP call for unknown tool");
                Err(McpError::invalid_params(format!("Unknown tool: {}", tool), None))
            }
            Err(e) => {
                if e.is_caller_error() {
                    debug!(tool = name, error = %e, "MCP tool call rejected");
                } else {
                    warn!(tool = name, error = %e, "MCP tool call failed");
                }
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = SERVER_NAME.to_string();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.invoke(&request.name, request.arguments).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.tool_list();
        debug!(count = tools.len(), "Listing MCP tools");
        Ok(ListToolsResult::with_all_items(tools))
    }
}
