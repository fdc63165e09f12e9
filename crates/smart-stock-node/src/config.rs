//! Node configuration.

use clap::Parser;
use smart_stock_types::{DEFAULT_GRAPHQL_PATH, DEFAULT_PORT};
use smart_stock_web::RenderMode;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::NodeError;
use crate::observability::LogFormat;

/// Smart Stock - GraphQL image API with server-rendered pages
#[derive(Parser, Debug, Clone)]
#[command(name = "smart-stock-node")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// HTTP listen port
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// HTTP listen address
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Path the GraphQL API and GraphiQL are served under
    #[arg(long, env = "GRAPHQL_PATH", default_value = DEFAULT_GRAPHQL_PATH)]
    pub graphql_path: String,

    /// Runtime environment; only `production` disables development rendering
    #[arg(long = "env", env = "NODE_ENV", default_value = "development")]
    pub environment: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log format (pretty, json)
    #[arg(long, env = "LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Start with empty collections instead of the seed data
    #[arg(long)]
    pub no_seed: bool,
}

/// Validated node configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address.
    pub addr: SocketAddr,
    /// API path prefix.
    pub graphql_path: String,
    /// Page rendering mode.
    pub mode: RenderMode,
    /// Log level.
    pub log_level: String,
    /// Log format.
    pub log_format: LogFormat,
    /// Whether to load the seed data.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
            graphql_path: DEFAULT_GRAPHQL_PATH.to_string(),
            mode: RenderMode::Development,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            seed: true,
        }
    }
}

impl Config {
    /// Overrides the API path.
    pub fn with_graphql_path(mut self, path: impl Into<String>) -> Self {
        self.graphql_path = path.into();
        self
    }

    /// Overrides the rendering mode.
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }
}

impl TryFrom<Args> for Config {
    type Error = NodeError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Ok(Self {
            addr: SocketAddr::new(args.host, args.port),
            graphql_path: validate_graphql_path(&args.graphql_path)?,
            mode: RenderMode::from_env_name(&args.environment),
            log_format: LogFormat::parse(&args.log_format),
            log_level: args.log_level,
            seed: !args.no_seed,
        })
    }
}

/// The API path must be absolute and must not be the site root, otherwise
/// no request could ever reach the page renderer. Braces and `*` are axum
/// route syntax and would turn the path into a capture.
fn validate_graphql_path(path: &str) -> Result<String, NodeError> {
    let trimmed = path.trim();
    if !trimmed.starts_with('/') {
        return Err(NodeError::Config(format!(
            "graphql path must start with '/': {trimmed:?}"
        )));
    }

    if let Some(c) = trimmed.chars().find(|c| matches!(c, '{' | '}' | '*')) {
        return Err(NodeError::Config(format!(
            "graphql path must not contain route syntax {c:?}: {trimmed:?}"
        )));
    }

    let normalized = trimmed.trim_end_matches('/');
    if normalized.is_empty() {
        return Err(NodeError::Config(
            "graphql path must not be the site root".to_string(),
        ));
    }

    Ok(normalized.to_string())
}
