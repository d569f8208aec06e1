use tracing::{debug, info};

use super::{ServerConfig, CONFIG_ENV_KEY};

pub fn log_env_source(path: Option<&std::path::Path>) {
    match path {
        Some(path) => info!(
            target: "mherb_mcp::config",
            path = %path.display(),
            "Loading configuration using MHERB_CONFIG_PATH environment variable"
        ),
        None => debug!(
            target: "mherb_mcp::config",
            env = CONFIG_ENV_KEY,
            "MHERB_CONFIG_PATH not set; using built-in server defaults"
        ),
    }
}

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "mherb_mcp::config",
        path = ?config.source_path,
        server_name = %config.server_name,
        transport = config.transport.as_str(),
        host = %config.host,
        port = config.port,
        log_level = config.log_level.as_str(),
        database_path = %config.database_path.display(),
        metadata_path = %config.metadata_path.display(),
        "Configuration file loaded successfully"
    );
}
