use std::process::ExitCode;

use tracing::{error, info};

use crate::lib::errors::ServerError;

/// How a server run ended without a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Operator interrupt.
    Stopped,
    /// The server returned on its own.
    Completed,
}

/// Final console line after an operator stop.
pub const SHUTDOWN_NOTICE: &str = "Server shutdown complete";

impl RunOutcome {
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            RunOutcome::Stopped | RunOutcome::Completed => ExitCode::SUCCESS,
        }
    }

    /// Line printed to stderr once the process is about to exit.
    pub const fn shutdown_notice(&self) -> Option<&'static str> {
        match self {
            RunOutcome::Stopped => Some(SHUTDOWN_NOTICE),
            RunOutcome::Completed => None,
        }
    }
}

/// Classify the result of a server run.
///
/// An interrupt is a normal stop. Every other error is logged (summary and detail) and handed
/// back to the caller.
pub fn classify_run_result(result: Result<(), ServerError>) -> Result<RunOutcome, ServerError> {
    match result {
        Ok(()) => {
            info!(target: "mherb_mcp::bootstrap", "Server stopped");
            Ok(RunOutcome::Completed)
        }
        Err(err) if err.is_interrupt() => {
            info!(target: "mherb_mcp::bootstrap", "Server stopped by user");
            Ok(RunOutcome::Stopped)
        }
        Err(err) => {
            error!(target: "mherb_mcp::bootstrap", "Server error: {err}");
            error!(
                target: "mherb_mcp::bootstrap",
                error = ?err,
                causes = %error_chain(&err),
                "Detailed error"
            );
            Err(err)
        }
    }
}

fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts.join(" <- ")
}
