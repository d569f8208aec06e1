//! Process bootstrap: logging, server creation, transport overrides, run and outcome.
//!
//! The controller owns the launcher's [`ServerConfig`] and the only handle to the server. It
//! walks [`BootstrapPhase`] in order and never skips the override step.
use std::{future::Future, process::ExitCode};

use tracing::{error, info};

use crate::{
    lib::{
        errors::{BootstrapError, ServerError},
        telemetry,
    },
    server::{
        config::{ServerConfig, TransportOverrides},
        factory::{ManagedServer, ServerFactory},
        runtime::RuntimeExit,
    },
};

pub mod banner;
mod interrupt;
mod outcome;
mod phase;

pub use banner::{access_url, log_banner, startup_banner, BANNER_RULE_WIDTH};
pub use interrupt::Interrupt;
pub use outcome::{classify_run_result, RunOutcome, SHUTDOWN_NOTICE};
pub use phase::BootstrapPhase;

use phase::PhaseTracker;

type LoggingInit = Box<dyn FnOnce(&ServerConfig) -> anyhow::Result<()>>;

/// Assembles a server from a factory and runs it under the launcher's transport settings.
pub struct Bootstrap<F> {
    config: ServerConfig,
    factory: F,
    init_logging: LoggingInit,
}

impl<F: ServerFactory> Bootstrap<F> {
    pub fn new(config: ServerConfig, factory: F) -> Self {
        Self {
            config,
            factory,
            init_logging: Box::new(telemetry::init_logging),
        }
    }

    /// Replace the logging initializer. It runs exactly once, before anything else logs.
    pub fn with_logging(
        mut self,
        init: impl FnOnce(&ServerConfig) -> anyhow::Result<()> + 'static,
    ) -> Self {
        self.init_logging = Box::new(init);
        self
    }

    /// Run the full lifecycle. Resolves when the server stops, fails, or `interrupt` fires.
    pub async fn run<I>(self, interrupt: I) -> Result<RunOutcome, BootstrapError>
    where
        I: Future<Output = ()>,
    {
        let Bootstrap {
            config,
            factory,
            init_logging,
        } = self;
        let mut phase = PhaseTracker::new();

        if let Err(source) = init_logging(&config) {
            let failed_in = phase.current();
            phase.advance(BootstrapPhase::Failed);
            return Err(BootstrapError::Logging {
                phase: failed_in,
                source,
            });
        }
        phase.advance(BootstrapPhase::LoggingReady);

        info!(
            target: "mherb_mcp::bootstrap",
            "Creating MCP server with {} transport...",
            config.transport.as_str().to_uppercase()
        );
        let mut server = match factory.create_server() {
            Ok(server) => server,
            Err(source) => {
                error!(
                    target: "mherb_mcp::bootstrap",
                    reason = %source,
                    "Failed to create server"
                );
                let failed_in = phase.current();
                phase.advance(BootstrapPhase::Failed);
                return Err(BootstrapError::Creation {
                    phase: failed_in,
                    source,
                });
            }
        };
        phase.advance(BootstrapPhase::ServerCreated);

        let overrides = TransportOverrides::from_config(&config);
        apply_overrides(&mut server, &overrides);
        phase.advance(BootstrapPhase::Overridden);

        log_banner(server.config());
        phase.advance(BootstrapPhase::Running);

        let result = tokio::select! {
            result = server.run(overrides.transport) => result,
            () = interrupt => Err(ServerError::Interrupted),
        };

        match classify_run_result(result) {
            Ok(outcome) => {
                phase.advance(BootstrapPhase::Stopped);
                Ok(outcome)
            }
            Err(source) => {
                let failed_in = phase.current();
                phase.advance(BootstrapPhase::Failed);
                Err(BootstrapError::Run {
                    phase: failed_in,
                    source,
                })
            }
        }
    }
}

/// Merge `overrides` into the server's live configuration.
pub fn apply_overrides<S: ManagedServer>(server: &mut S, overrides: &TransportOverrides) {
    let merged = server.config().clone().with_overrides(overrides);
    server.set_config(merged);
}

/// Top-level boundary: map the bootstrap result to the process exit code.
pub fn finish(result: Result<RunOutcome, BootstrapError>) -> ExitCode {
    match result {
        Ok(outcome) => {
            if let Some(notice) = outcome.shutdown_notice() {
                eprintln!("{notice}");
            }
            outcome.exit_code()
        }
        Err(err) => RuntimeExit::from_error(err).report(),
    }
}
