//! Process-wide logging setup.

use std::io::IsTerminal;

use anyhow::Result;
use tracing::{level_filters::LevelFilter, Subscriber};
use tracing_subscriber::{fmt, fmt::MakeWriter, EnvFilter};

use crate::server::config::{LogLevel, ServerConfig};

/// Initialize the global `tracing` subscriber from `config.log_level`.
///
/// `RUST_LOG` directives are layered on top of the configured level. Logs emitted before this
/// call are dropped.
pub fn init_logging(config: &ServerConfig) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    fmt()
        .with_env_filter(env_filter(config.log_level))
        .with_target(true)
        .with_thread_ids(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Build a subscriber writing plain text to `writer`, filtered only by `config.log_level`.
pub fn build_subscriber<W>(
    config: &ServerConfig,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt()
        .with_max_level(LevelFilter::from(config.log_level))
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .finish()
}

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .from_env_lossy()
}
