//! mlb-api: HTTP surface for mlb-gateway
//!
//! ドキュメント (Swagger UI / ReDoc / OpenAPI)、ヘルスチェック、
//! ツールごとの REST エンドポイント、MCP streamable HTTP のマウントを提供します。
//! Built with axum.

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod server;

pub use error::{ApiError, Result};
pub use server::{AppState, build_router, start_server};
