//! Startup banner announcing the effective configuration.
use tracing::info;

use crate::server::{
    config::{ServerConfig, TransportKind},
    runtime::SSE_PATH,
};

pub const BANNER_RULE_WIDTH: usize = 60;

/// Render the banner lines for `config`.
pub fn startup_banner(config: &ServerConfig) -> Vec<String> {
    let rule = "=".repeat(BANNER_RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        format!(
            "Starting MCP Server with {} Transport",
            config.transport.as_str().to_uppercase()
        ),
        rule.clone(),
        format!("Server Name: {}", config.server_name),
        format!("Transport: {}", config.transport.label()),
        format!("Host: {}", config.host),
        format!("Port: {}", config.port),
        format!("Database: {}", config.database_path.display()),
        rule.clone(),
    ];

    if config.transport.is_network() {
        let url = access_url(config);
        lines.push(format!("Server will be accessible at: {url}"));
        if config.transport == TransportKind::Sse {
            lines.push(format!("SSE endpoint: {url}{SSE_PATH}"));
        }
        lines.push(rule);
    }

    lines.push("Press Ctrl+C to stop the server".to_string());
    lines
}

/// `http://<host>:<port>`, bracketing IPv6 literals.
pub fn access_url(config: &ServerConfig) -> String {
    if config.host.contains(':') {
        format!("http://[{}]:{}", config.host, config.port)
    } else {
        format!("http://{}:{}", config.host, config.port)
    }
}

pub fn log_banner(config: &ServerConfig) {
    for line in startup_banner(config) {
        info!(target: "mherb_mcp::bootstrap", "{line}");
    }
}
