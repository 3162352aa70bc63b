//! mlb-mcp: MCP (Model Context Protocol) Server
//!
//! ツールレジストリを rmcp の `ServerHandler` として公開します。
//! streamable HTTP (axum にマウント) と stdio の両方に対応します。

pub mod server;
pub mod transport;

pub use server::{McpServer, SERVER_NAME};
pub use transport::{serve_stdio, streamable_http_service};
