use std::{process::ExitCode, sync::Arc};

use anyhow::Error;
use axum::Router;
use rmcp::{
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
    },
    ServiceExt,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{
    lib::errors::ServerError,
    server::{
        config::{ServerConfig, TransportKind},
        metadata::ResourceMetadata,
        runtime::{build_instructions, MherbHandler},
    },
};

/// Mount point of the event-stream endpoint.
pub const SSE_PATH: &str = "/sse";

/// Bundles a fatal error message with the process exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: err.to_string(),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Print the fatal error to stderr and hand back the exit code.
    pub fn report(self) -> ExitCode {
        eprintln!("Fatal error: {}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Serve the MCP handler over `transport` using the merged configuration.
pub async fn serve(
    config: ServerConfig,
    metadata: Arc<ResourceMetadata>,
    transport: TransportKind,
) -> Result<(), ServerError> {
    if transport.is_network() && config.port == 0 {
        return Err(ServerError::InvalidPort {
            transport: transport.as_str(),
            port: config.port,
        });
    }

    let instructions = build_instructions(&config, &metadata, transport);
    let handler = MherbHandler::new(config.server_name.clone(), instructions.clone());

    info!(
        target: "mherb_mcp::runtime",
        transport = transport.as_str(),
        host = %config.host,
        port = config.port,
        allow_cors = config.allow_cors,
        instructions = %instructions,
        "Started MCP server"
    );

    match transport {
        TransportKind::Stdio => run_stdio(handler).await,
        TransportKind::Sse => run_sse(handler, &config).await,
    }
}

async fn run_stdio(handler: MherbHandler) -> Result<(), ServerError> {
    let running = handler
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|err| ServerError::transport("stdio", err))?;
    running
        .waiting()
        .await
        .map_err(|err| ServerError::transport("stdio", err))?;
    Ok(())
}

async fn run_sse(handler: MherbHandler, config: &ServerConfig) -> Result<(), ServerError> {
    let service = StreamableHttpService::new(
        move || Ok(handler.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );
    let mut router = Router::new().nest_service(SSE_PATH, service);
    if config.allow_cors {
        router = router.layer(CorsLayer::permissive());
    }

    let (listener, addr) = bind(config).await?;
    info!(
        target: "mherb_mcp::runtime",
        transport = "sse",
        bind_addr = %addr,
        endpoint = SSE_PATH,
        allow_cors = config.allow_cors,
        "Started listening in SSE mode"
    );

    axum::serve(listener, router)
        .await
        .map_err(|err| ServerError::transport("sse", err))
}

async fn bind(config: &ServerConfig) -> Result<(TcpListener, String), ServerError> {
    let addr = format!("{}:{}", config.host, config.port);
    match TcpListener::bind(&addr).await {
        Ok(listener) => Ok((listener, addr)),
        Err(source) => Err(ServerError::Bind { addr, source }),
    }
}
