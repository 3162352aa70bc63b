//! mlb-gateway: MLB Stats MCP Gateway Main Binary
//!
//! Usage:
//!   mlb-gateway                 - Start server mode (HTTP docs/REST + MCP streamable HTTP)
//!   mlb-gateway --stdio         - Serve MCP over stdin/stdout
//!   mlb-gateway --list-tools    - Print registered tools and exit
//!   mlb-gateway --help          - Show help

use std::sync::Arc;

use mlb_core::{Config, ToolManager};
use mlb_mcp::McpServer;
use mlb_stats::MlbStatsClient;
use mlb_tools::default_manager;
use tracing_subscriber::EnvFilter;

/// Run mode
enum RunMode {
    /// HTTP server (docs, REST routes, MCP endpoint)
    Server,
    /// MCP over stdio
    Stdio,
    /// Print the tool registry
    ListTools,
    /// Show help
    Help,
    /// Show version
    Version,
}

struct CliArgs {
    mode: RunMode,
    config_path: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args()?;

    match args.mode {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("mlb-gateway {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    // Load .env file
    dotenvy::dotenv().ok();

    // stdout belongs to the MCP transport in stdio mode, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config_path {
        Some(path) => Config::from_toml_file(path),
        None => Config::load(),
    }
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    let client = MlbStatsClient::from_config(&config.stats)
        .map_err(|e| anyhow::anyhow!("Failed to create MLB Stats API client: {}", e))?;
    tracing::info!("MLB Stats API: {}", client.base_url());

    let tools = Arc::new(default_manager(Arc::new(client)));

    match args.mode {
        RunMode::ListTools => {
            print_tools(&tools);
            Ok(())
        }
        RunMode::Stdio => {
            tracing::info!("Starting mlb-gateway (MCP stdio)...");
            mlb_mcp::serve_stdio(McpServer::new(tools)).await?;
            Ok(())
        }
        RunMode::Server => {
            tracing::info!("Starting mlb-gateway...");
            tracing::info!(
                "Registered {} tools: {:?}",
                tools.len(),
                tools.tool_names()
            );
            mlb_api::start_server(config, tools).await
        }
        _ => Ok(()),
    }
}

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// `LOG_LEVEL`, then `RUST_LOG`, then `info`
///
/// A bare `LOG_LEVEL` such as `DEBUG` is lowercased; full directives are
/// passed through untouched.
fn filter_directive(log_level: Option<String>, rust_log: Option<String>) -> String {
    match (log_level, rust_log) {
        (Some(level), _) => {
            let trimmed = level.trim();
            let lowered = trimmed.to_lowercase();
            if LEVELS.contains(&lowered.as_str()) {
                lowered
            } else {
                trimmed.to_string()
            }
        }
        (None, Some(directive)) => directive,
        (None, None) => "info".to_string(),
    }
}

fn log_filter() -> anyhow::Result<EnvFilter> {
    let directive = filter_directive(non_empty_env("LOG_LEVEL"), non_empty_env("RUST_LOG"));
    EnvFilter::try_new(&directive)
        .map_err(|e| anyhow::anyhow!("Invalid log filter '{}': {}", directive, e))
}

/// Parse command line arguments
fn parse_args() -> anyhow::Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs {
        mode: RunMode::Server,
        config_path: None,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--stdio" => parsed.mode = RunMode::Stdio,
            "--list-tools" => parsed.mode = RunMode::ListTools,
            "--help" | "-h" => parsed.mode = RunMode::Help,
            "--version" | "-v" => parsed.mode = RunMode::Version,
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                parsed.config_path = Some(path);
            }
            other => anyhow::bail!("Unknown argument: {} (see --help)", other),
        }
    }

    Ok(parsed)
}

/// Print help message
fn print_help() {
    println!("mlb-gateway - MLB Stats API tools over MCP");
    println!();
    println!("Usage:");
    println!("  mlb-gateway                 Start HTTP server (docs, REST routes, MCP endpoint)");
    println!("  mlb-gateway --stdio         Serve MCP over stdin/stdout");
    println!("  mlb-gateway --list-tools    Print registered tools and exit");
    println!("  mlb-gateway --config PATH   Read configuration from PATH");
    println!("  mlb-gateway --help          Show this help message");
    println!("  mlb-gateway --version       Show version");
    println!();
    println!("Environment Variables:");
    println!("  LOG_LEVEL               Log verbosity (default: info, falls back to RUST_LOG)");
    println!("  MLB_GATEWAY_HOST        Bind host (default: 0.0.0.0)");
    println!("  MLB_GATEWAY_PORT        Bind port (default: 8000)");
    println!("  MLB_GATEWAY_ALLOWED_ORIGINS  Comma-separated CORS origins (default: any)");
    println!("  MLB_STATS_BASE_URL      MLB Stats API base URL");
    println!("  MLB_STATS_TIMEOUT_SECS  Upstream request timeout (default: 30)");
    println!("  MCP_ENABLED             Mount the MCP endpoint (default: true)");
    println!("  MCP_PATH                MCP endpoint path (default: /mcp)");
}

fn print_tools(tools: &ToolManager) {
    for def in tools.definitions() {
        println!("{:<32} GET {}", def.name, def.http_path);
    }
}
