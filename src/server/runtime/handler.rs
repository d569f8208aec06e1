use std::sync::Arc;

use rmcp::{
    handler::server::ServerHandler,
    model::{Implementation, ServerCapabilities, ServerInfo},
};

/// rmcp handler advertising the server's identity and instructions.
#[derive(Debug, Clone)]
pub struct MherbHandler {
    server_name: Arc<String>,
    instructions: Arc<String>,
}

impl MherbHandler {
    pub fn new(server_name: String, instructions: String) -> Self {
        Self {
            server_name: Arc::new(server_name),
            instructions: Arc::new(instructions),
        }
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }
}

impl ServerHandler for MherbHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().build(),
            server_info: Implementation {
                name: (*self.server_name).clone(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::default()
            },
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }
}
