//! mlb-core: MLB Gateway Core Library
//!
//! ツールシステム、パラメータ正規化、設定、エラー型など
//! ゲートウェイ全体で共有するコア機能を提供します。

pub mod choices;
pub mod config;
pub mod error;
pub mod params;
pub mod tool;

pub use config::{Config, McpConfig, ServerConfig, StatsApiConfig};
pub use error::{Error, Result};
pub use params::Args;
pub use tool::{ParamKind, ParamSpec, Tool, ToolDefinition, ToolManager, ToolRequest};
