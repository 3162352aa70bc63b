//! Configuration management
//!
//! 設定は以下の優先順位で読み込まれます:
//! 1. 環境変数
//! 2. mlb-gateway.toml 設定ファイル
//! 3. デフォルト値
//!
//! 設定ファイル内では `${VAR_NAME}` 形式で環境変数を展開できます。
//! ログレベルは `LOG_LEVEL` 環境変数のみで制御します (バイナリ側で処理)。

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::Error;

/// Default config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "mlb-gateway.toml";

/// Routes owned by the HTTP surface
const RESERVED_PATHS: &[&str] = &[
    "/health",
    "/tools",
    "/mcp/info",
    "/openapi.json",
    "/docs",
    "/redoc",
];

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins. `None` means permissive.
    #[serde(default)]
    pub allowed_origins: Option<Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: None,
        }
    }
}

impl ServerConfig {
    /// Get the socket address to bind
    pub fn socket_addr(&self) -> crate::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address: {}", e)))
    }
}

/// MLB Stats API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsApiConfig {
    /// Base URL including the API version segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent upstream
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for StatsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// MCP surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpConfig {
    /// Whether the streamable HTTP endpoint is mounted
    #[serde(default = "default_mcp_enabled")]
    pub enabled: bool,

    /// Mount path of the streamable HTTP endpoint
    #[serde(default = "default_mcp_path")]
    pub path: String,
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            enabled: default_mcp_enabled(),
            path: default_mcp_path(),
        }
    }
}

/// Main configuration for mlb-gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream statistics API configuration
    #[serde(default)]
    pub stats: StatsApiConfig,

    /// MCP configuration
    #[serde(default)]
    pub mcp: McpConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_base_url() -> String {
    "https://statsapi.mlb.com/api/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("mlb-gateway/{}", env!("CARGO_PKG_VERSION"))
}

fn default_mcp_enabled() -> bool {
    true
}

fn default_mcp_path() -> String {
    "/mcp".to_string()
}

impl Config {
    /// 設定ファイルから環境変数を展開する
    ///
    /// `${VAR_NAME}` 形式の文字列を環境変数の値に置換します。
    /// 環境変数が存在しない場合は空文字列になります。
    fn expand_env_vars(value: &str) -> String {
        let mut result = String::new();
        let mut chars = value.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' && chars.peek() == Some(&'{') {
                chars.next(); // '{' を消費

                let mut var_name = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    var_name.push(c);
                }

                if let Ok(env_value) = std::env::var(&var_name) {
                    result.push_str(&env_value);
                }
            } else {
                result.push(c);
            }
        }

        result
    }

    /// TOML 文字列から設定を構築する (環境変数展開あり、上書きなし)
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let expanded = Self::expand_env_vars(content);
        let cfg: Self = toml::from_str(&expanded)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// MCP パスが HTTP ルートとして有効か検証する
    pub fn validate(&self) -> crate::Result<()> {
        let path = self.mcp.path.as_str();
        let literal = !path.contains(|c: char| matches!(c, '{' | '}' | '*'));
        if !path.starts_with('/') || path.len() < 2 || !literal {
            return Err(Error::Config(format!(
                "MCP path must be a literal absolute path: {}",
                path
            )));
        }
        if RESERVED_PATHS.contains(&path.trim_end_matches('/')) {
            return Err(Error::Config(format!(
                "MCP path collides with a built-in route: {}",
                path
            )));
        }
        Ok(())
    }

    /// TOML 設定ファイルから設定を読み込む
    ///
    /// 読み込み後、環境変数で上書きします (環境変数が優先)。
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();

        let toml_content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let mut cfg = Self::from_toml_str(&toml_content)?;
        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    /// デフォルトパスから設定を読み込む
    ///
    /// `./mlb-gateway.toml` があればそれを使い、なければ環境変数のみ。
    pub fn load() -> crate::Result<Self> {
        if Path::new(CONFIG_FILE_NAME).exists() {
            return Self::from_toml_file(CONFIG_FILE_NAME);
        }

        Self::from_env()
    }

    /// Load configuration from defaults plus environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    /// 環境変数で設定を上書きする
    fn apply_env_overrides(&mut self) -> crate::Result<()> {
        // Server 設定
        if let Some(host) = non_empty_env("MLB_GATEWAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = non_empty_env("MLB_GATEWAY_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("MLB_GATEWAY_PORT is not a valid port: {}", port)))?;
        }
        if let Some(origins) = non_empty_env("MLB_GATEWAY_ALLOWED_ORIGINS") {
            self.server.allowed_origins = Some(
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            );
        }

        // Stats API 設定
        if let Some(base_url) = non_empty_env("MLB_STATS_BASE_URL") {
            self.stats.base_url = base_url;
        }
        if let Some(timeout) = non_empty_env("MLB_STATS_TIMEOUT_SECS") {
            self.stats.timeout_secs = timeout.parse().map_err(|_| {
                Error::Config(format!("MLB_STATS_TIMEOUT_SECS is not a number: {}", timeout))
            })?;
        }

        // MCP 設定
        if let Some(enabled) = non_empty_env("MCP_ENABLED") {
            self.mcp.enabled = enabled.to_lowercase() != "false";
        }
        if let Some(path) = non_empty_env("MCP_PATH") {
            self.mcp.path = path;
        }

        self.validate()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
