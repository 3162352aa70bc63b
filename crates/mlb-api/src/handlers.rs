//! HTTP API handlers
//!
//! Health, registry listing and tool invocation.

use std::collections::HashMap;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde_json::{Map, Value as JsonValue, json};
use tracing::{debug, info};

use mlb_core::ToolRequest;
use mlb_mcp::SERVER_NAME;

use crate::error::{ApiError, Result};
use crate::server::AppState;

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<JsonValue> {
    Json(json!({
        "status": "healthy",
        "service": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "tools": state.tools.len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// List every registered tool descriptor
pub async fn list_tools(State(state): State<AppState>) -> Json<JsonValue> {
    let tools = state.tools.definitions();
    Json(json!({
        "count": tools.len(),
        "tools": tools,
    }))
}

/// Describe the MCP endpoint
pub async fn mcp_info(State(state): State<AppState>) -> Json<JsonValue> {
    let mcp = &state.config.mcp;
    Json(json!({
        "name": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "enabled": mcp.enabled,
        "path": mcp.path,
        "transport": "streamable-http",
        "tools": state.tools.tool_names(),
    }))
}

/// Invoke a tool with a JSON body: `POST /tools/{name}`
///
/// An empty body is treated as "no arguments".
pub async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<JsonValue>> {
    let args = if body.iter().all(u8::is_ascii_whitespace) {
        JsonValue::Null
    } else {
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))?
    };

    run_tool(&state, ToolRequest::new(name, args)).await
}

/// Run a tool and wrap its result
pub async fn run_tool(state: &AppState, request: ToolRequest) -> Result<Json<JsonValue>> {
    let name = request.name.clone();
    debug!(tool = %name, "HTTP tool call");
    let result = state.tools.dispatch(request).await?;
    info!(tool = %name, "HTTP tool call completed");
    Ok(Json(result))
}

/// Merge query and path parameters into a tool argument object
///
/// Values stay strings; tools coerce numeric parameters themselves.
/// Path segments win over query parameters of the same name.
pub fn query_to_args(
    query: HashMap<String, String>,
    path: HashMap<String, String>,
) -> JsonValue {
    let args: Map<String, JsonValue> = query
        .into_iter()
        .chain(path)
        .map(|(key, value)| (key, JsonValue::String(value)))
        .collect();
    JsonValue::Object(args)
}
