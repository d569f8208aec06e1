use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

use crate::bootstrap::BootstrapPhase;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// The server factory could not produce a server.
#[derive(Debug, Error)]
pub enum ServerCreationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to read metadata file {path}: {source}")]
    MetadataRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Metadata file {path} is malformed: {source}")]
    MetadataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures surfaced by a running server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The operator stopped the server. Not a failure for exit-code purposes.
    #[error("server interrupted by operator")]
    Interrupted,
    #[error("port {port} is not usable for the {transport} transport")]
    InvalidPort { transport: &'static str, port: u16 },
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("{transport} transport failed: {message}")]
    Transport {
        transport: &'static str,
        message: String,
    },
    #[error(transparent)]
    Runtime(#[from] anyhow::Error),
}

impl ServerError {
    pub fn transport(transport: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Transport {
            transport,
            message: err.to_string(),
        }
    }

    pub fn is_interrupt(&self) -> bool {
        matches!(self, ServerError::Interrupted)
    }
}

/// A fatal bootstrap failure, tagged with the phase it happened in.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to initialize logging: {source:#}")]
    Logging {
        phase: BootstrapPhase,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to create server: {source}")]
    Creation {
        phase: BootstrapPhase,
        #[source]
        source: ServerCreationError,
    },
    #[error("server error: {source}")]
    Run {
        phase: BootstrapPhase,
        #[source]
        source: ServerError,
    },
}

impl BootstrapError {
    pub fn phase(&self) -> BootstrapPhase {
        match self {
            BootstrapError::Logging { phase, .. }
            | BootstrapError::Creation { phase, .. }
            | BootstrapError::Run { phase, .. } => *phase,
        }
    }
}
