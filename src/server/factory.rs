//! Server creation seam used by the bootstrap controller.
use std::{future::Future, path::PathBuf, sync::Arc};

use tracing::info;

use crate::{
    lib::errors::{ServerCreationError, ServerError},
    server::{
        config::{ServerConfig, TransportKind},
        metadata::{self, ResourceMetadata},
        runtime,
    },
};

/// Produces servers pre-wired with their own default configuration.
pub trait ServerFactory {
    type Server: ManagedServer;

    fn create_server(&self) -> Result<Self::Server, ServerCreationError>;
}

/// A server whose live configuration can be read and replaced before it runs.
pub trait ManagedServer {
    fn config(&self) -> &ServerConfig;

    fn set_config(&mut self, config: ServerConfig);

    /// Serve over `transport` until the server stops or fails.
    fn run(self, transport: TransportKind) -> impl Future<Output = Result<(), ServerError>>;
}

/// Factory that layers `MHERB_CONFIG_PATH` (or an explicit file) over the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct DefaultServerFactory {
    config_path: Option<PathBuf>,
}

impl DefaultServerFactory {
    pub fn with_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    fn load_config(&self) -> Result<ServerConfig, ServerCreationError> {
        let config = match &self.config_path {
            Some(path) => ServerConfig::load_from_path(path.clone())?,
            None => ServerConfig::load_from_env_or_default()?,
        };
        Ok(config)
    }
}

impl ServerFactory for DefaultServerFactory {
    type Server = MherbServer;

    fn create_server(&self) -> Result<MherbServer, ServerCreationError> {
        let config = self.load_config()?;
        let metadata = metadata::load_metadata(&config.metadata_path)?;
        info!(
            target: "mherb_mcp::runtime",
            server_name = %config.server_name,
            default_transport = config.transport.as_str(),
            "Created MCP server"
        );
        Ok(MherbServer::new(config, metadata))
    }
}

/// Create a server with the default factory.
pub fn create_server() -> Result<MherbServer, ServerCreationError> {
    DefaultServerFactory::default().create_server()
}

/// The mherb MCP server: its live configuration plus the metadata loaded at creation.
#[derive(Debug, Clone)]
pub struct MherbServer {
    config: ServerConfig,
    metadata: Arc<ResourceMetadata>,
}

impl MherbServer {
    pub fn new(config: ServerConfig, metadata: ResourceMetadata) -> Self {
        Self {
            config,
            metadata: Arc::new(metadata),
        }
    }

    pub fn metadata(&self) -> &ResourceMetadata {
        &self.metadata
    }
}

impl ManagedServer for MherbServer {
    fn config(&self) -> &ServerConfig {
        &self.config
    }

    fn set_config(&mut self, config: ServerConfig) {
        self.config = config;
    }

    async fn run(self, transport: TransportKind) -> Result<(), ServerError> {
        runtime::serve(self.config, self.metadata, transport).await
    }
}
