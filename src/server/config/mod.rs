//! Server configuration model and factory-side loading.
use std::{env, path::PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod logging;
pub mod overrides;
pub mod server;
pub mod storage;
pub mod telemetry;

pub use logging::{parse_logging_section, LogLevel, RawLoggingSection};
pub use overrides::TransportOverrides;
pub use server::{
    parse_server_section, RawServerSection, ServerSection, TransportKind, DEFAULT_HOST,
    DEFAULT_PORT, DEFAULT_SERVER_NAME,
};
pub use storage::{
    parse_storage_section, RawStorageSection, StorageSection, DEFAULT_DATABASE_PATH,
    DEFAULT_METADATA_PATH,
};

pub(crate) const CONFIG_ENV_KEY: &str = "MHERB_CONFIG_PATH";

/// How the server should run.
///
/// Build one with struct-update syntax over [`ServerConfig::default`]. No field is validated
/// here; the server rejects unusable values when it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub transport: TransportKind,
    pub host: String,
    pub port: u16,
    pub log_level: LogLevel,
    pub database_path: PathBuf,
    pub metadata_path: PathBuf,
    pub allow_cors: bool,
    pub server_name: String,
    /// File the values were layered from, if any.
    pub source_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::default(),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            allow_cors: false,
            server_name: DEFAULT_SERVER_NAME.to_string(),
            source_path: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawServerConfig {
    server: Option<RawServerSection>,
    logging: Option<RawLoggingSection>,
    storage: Option<RawStorageSection>,
}

impl ServerConfig {
    /// Layer `MHERB_CONFIG_PATH` over the defaults when it is set; otherwise return the defaults.
    pub fn load_from_env_or_default() -> Result<Self, ConfigError> {
        match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => {
                let path = PathBuf::from(value);
                telemetry::log_env_source(Some(&path));
                Self::load_from_path(path)
            }
            _ => {
                telemetry::log_env_source(None);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific TOML file.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "mherb_mcp::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "mherb_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawServerConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "mherb_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "mherb_mcp::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawServerConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let server = parse_server_section(raw.server, &path)?;
        let log_level = parse_logging_section(raw.logging);
        let storage = parse_storage_section(raw.storage);

        Ok(Self {
            transport: server.transport,
            host: server.host,
            port: server.port,
            log_level,
            database_path: storage.database_path,
            metadata_path: storage.metadata_path,
            allow_cors: server.allow_cors,
            server_name: server.name,
            source_path: Some(path),
        })
    }
}
