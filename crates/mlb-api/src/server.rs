//! HTTP API Server
//!
//! Starts and manages the axum-based HTTP server.

use std::sync::Arc;

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use mlb_core::{Config, Error, ToolManager};
use mlb_mcp::{McpServer, streamable_http_service};

use crate::routes::routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tools: Arc<ToolManager>,
}

impl AppState {
    pub fn new(config: Config, tools: Arc<ToolManager>) -> Self {
        Self {
            config: Arc::new(config),
            tools,
        }
    }
}

fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = allowed_origins else {
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Whether a literal request path is served by a route template
fn template_matches(template: &str, path: &str) -> bool {
    let template: Vec<&str> = template.trim_end_matches('/').split('/').collect();
    let path: Vec<&str> = path.trim_end_matches('/').split('/').collect();

    template.len() == path.len()
        && template
            .iter()
            .zip(&path)
            .all(|(t, p)| t == p || (t.starts_with('{') && t.ends_with('}')))
}

/// Reject an MCP path that collides with a tool route or `/tools/{name}`
fn check_mcp_path(config: &Config, tools: &ToolManager) -> mlb_core::Result<()> {
    config.validate()?;

    let path = config.mcp.path.as_str();
    if path.starts_with("/tools/") {
        return Err(Error::Config(format!(
            "MCP path collides with /tools/{{name}}: {}",
            path
        )));
    }
    if let Some(def) = tools
        .definitions()
        .into_iter()
        .find(|def| template_matches(&def.http_path, path))
    {
        return Err(Error::Config(format!(
            "MCP path {} collides with the route of tool {}",
            path, def.name
        )));
    }
    Ok(())
}

/// Build the application router
///
/// Mounts the docs/health routes, one REST route per registered tool and,
/// when enabled, the MCP streamable HTTP endpoint.
///
/// # Errors
/// `Config` when the MCP path collides with another route
pub fn build_router(state: AppState) -> mlb_core::Result<Router> {
    let mut app = Router::new().merge(routes(&state.tools));

    if state.config.mcp.enabled {
        check_mcp_path(&state.config, &state.tools)?;
        let server = McpServer::new(state.tools.clone());
        app = app.route_service(&state.config.mcp.path, streamable_http_service(server));
    }

    Ok(app
        .layer(cors_layer(state.config.server.allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

/// Start the HTTP API server
pub async fn start_server(config: Config, tools: Arc<ToolManager>) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;
    let mcp_path = config.mcp.enabled.then(|| config.mcp.path.clone());

    let app = build_router(AppState::new(config, tools))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP API listening on {}", addr);
    if let Some(path) = mcp_path {
        info!("MCP endpoint mounted at {}", path);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP API stopped");
    Ok(())
}
