use super::{ServerConfig, TransportKind};

/// Transport-specific fields the launcher forces onto the server's own configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOverrides {
    pub transport: TransportKind,
    pub host: String,
    pub port: u16,
    pub allow_cors: bool,
}

impl TransportOverrides {
    /// Take the override fields from the launcher's desired configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            transport: config.transport,
            host: config.host.clone(),
            port: config.port,
            allow_cors: config.allow_cors,
        }
    }
}

impl ServerConfig {
    /// Merge `overrides` on top of `self`. Override fields win; every other field is kept.
    pub fn with_overrides(self, overrides: &TransportOverrides) -> Self {
        Self {
            transport: overrides.transport,
            host: overrides.host.clone(),
            port: overrides.port,
            allow_cors: overrides.allow_cors,
            ..self
        }
    }
}
