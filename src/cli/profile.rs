//! Literal launch profile for the SSE deployment.
use std::path::PathBuf;

use crate::server::config::{LogLevel, ServerConfig, TransportKind};

pub const SSE_HOST: &str = "0.0.0.0";
pub const SSE_PORT: u16 = 8000;
pub const SSE_LOG_LEVEL: LogLevel = LogLevel::Info;
pub const SSE_DATABASE_PATH: &str = "test_data/sample.db";
pub const SSE_METADATA_PATH: &str = "resources/metadata.json";
pub const SSE_ALLOW_CORS: bool = true;

/// Configuration the launcher wants: SSE on all interfaces with cross-origin access.
pub fn sse_launch_config() -> ServerConfig {
    ServerConfig {
        transport: TransportKind::Sse,
        host: SSE_HOST.to_string(),
        port: SSE_PORT,
        log_level: SSE_LOG_LEVEL,
        database_path: PathBuf::from(SSE_DATABASE_PATH),
        metadata_path: PathBuf::from(SSE_METADATA_PATH),
        allow_cors: SSE_ALLOW_CORS,
        ..ServerConfig::default()
    }
}
