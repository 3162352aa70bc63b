//! MCP transports: streamable HTTP (mounted into axum) and stdio

use rmcp::ServiceExt;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tracing::info;

use mlb_core::{Error, Result};

use crate::server::McpServer;

/// Streamable HTTP service, one `McpServer` clone per session
pub fn streamable_http_service(
    server: McpServer,
) -> StreamableHttpService<McpServer, LocalSessionManager> {
    StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    )
}

/// Serve MCP over stdin/stdout until the client disconnects
pub async fn serve_stdio(server: McpServer) -> Result<()> {
    info!(tools = server.tools().len(), "Serving MCP over stdio");

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| Error::Mcp(format!("Failed to start stdio transport: {}", e)))?;

    let reason = service
        .waiting()
        .await
        .map_err(|e| Error::Mcp(format!("stdio transport terminated: {}", e)))?;

    info!(reason = ?reason, "MCP stdio session closed");
    Ok(())
}
