//! Route definitions
//!
//! Static documentation/health routes plus one `GET` route per tool,
//! derived from the registry at startup.

use std::collections::HashMap;

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use mlb_core::{ToolManager, ToolRequest};

use crate::handlers::{call_tool, health, list_tools, mcp_info, query_to_args, run_tool};
use crate::openapi::{docs, openapi_json, redoc};
use crate::server::AppState;

type Params = HashMap<String, String>;

/// Create the API router
pub fn routes(tools: &ToolManager) -> Router<AppState> {
    let mut router = Router::new()
        // Health check
        .route("/health", get(health))
        .route("/health/", get(health))
        // Registry listing
        .route("/tools", get(list_tools))
        .route("/tools/", get(list_tools))
        .route("/mcp/info", get(mcp_info))
        // Documentation
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(docs))
        .route("/redoc", get(redoc))
        // Generic invocation
        .route("/tools/{name}", post(call_tool));

    for def in tools.definitions() {
        let name = def.name.clone();
        // axum rejects Path extraction on routes without segments
        router = if def.path_params().is_empty() {
            router.route(
                &def.http_path,
                get(move |State(state): State<AppState>, Query(query): Query<Params>| {
                    let args = query_to_args(query, Params::new());
                    let request = ToolRequest::new(name.clone(), args);
                    async move { run_tool(&state, request).await }
                }),
            )
        } else {
            router.route(
                &def.http_path,
                get(
                    move |State(state): State<AppState>,
                          Path(path): Path<Params>,
                          Query(query): Query<Params>| {
                        let request = ToolRequest::new(name.clone(), query_to_args(query, path));
                        async move { run_tool(&state, request).await }
                    },
                ),
            )
        };
    }

    router
}
