use crate::server::{
    config::{ServerConfig, TransportKind},
    metadata::ResourceMetadata,
};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(
    config: &ServerConfig,
    metadata: &ResourceMetadata,
    transport: TransportKind,
) -> String {
    let dataset = metadata.title.as_deref().unwrap_or("unnamed dataset");
    if transport.is_network() {
        format!(
            "{name} serving {dataset} over {transport} (host={host}, port={port}).",
            name = config.server_name,
            transport = transport.as_str(),
            host = config.host,
            port = config.port
        )
    } else {
        format!(
            "{name} serving {dataset} over {transport}.",
            name = config.server_name,
            transport = transport.as_str()
        )
    }
}
