use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::lib::errors::ConfigError;

pub const DEFAULT_SERVER_NAME: &str = "mherb-mcp";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// I/O binding the server uses to talk to MCP clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Stdio,
    Sse,
}

impl TransportKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Stdio => "stdio",
            TransportKind::Sse => "sse",
        }
    }

    /// Human-readable label used in the startup banner.
    pub const fn label(&self) -> &'static str {
        match self {
            TransportKind::Stdio => "stdio (standard streams)",
            TransportKind::Sse => "SSE (Server-Sent Events)",
        }
    }

    /// Whether `host`/`port` are meaningful for this transport.
    pub const fn is_network(&self) -> bool {
        !matches!(self, TransportKind::Stdio)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawServerSection {
    pub name: Option<String>,
    pub transport: Option<TransportKind>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub allow_cors: Option<bool>,
}

/// Resolved `[server]` values, each falling back to the factory default.
#[derive(Debug, Clone)]
pub struct ServerSection {
    pub name: String,
    pub transport: TransportKind,
    pub host: String,
    pub port: u16,
    pub allow_cors: bool,
}

pub fn parse_server_section(
    raw: Option<RawServerSection>,
    path: &Path,
) -> Result<ServerSection, ConfigError> {
    let server_raw = raw.unwrap_or_default();
    let port = server_raw.port.unwrap_or(DEFAULT_PORT);
    validate_port(port, path)?;
    Ok(ServerSection {
        name: server_raw
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string()),
        transport: server_raw.transport.unwrap_or_default(),
        host: server_raw.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port,
        allow_cors: server_raw.allow_cors.unwrap_or(false),
    })
}

fn validate_port(port: u16, path: &Path) -> Result<(), ConfigError> {
    if port != 0 {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "server.port",
        message: "Use a port in the range 1-65535".into(),
    })
}
