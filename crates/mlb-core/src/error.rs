//! Error types for mlb-core

use thiserror::Error;

/// Main error type for mlb-core
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied parameter failed schema, enum or date validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    /// The statistics client failed; the message is carried verbatim
    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("MCP error: {0}")]
    Mcp(String),
}

impl Error {
    /// Shorthand for an `InvalidArgument` naming the offending parameter
    pub fn invalid(param: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("'{}' {}", param, reason))
    }

    /// Whether the error was caused by the caller rather than by the gateway or upstream
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::ToolNotFound(_))
    }
}

/// Result type alias for mlb-core
pub type Result<T> = std::result::Result<T, Error>;
