use tracing::debug;

/// Bootstrap lifecycle, in the order the controller walks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    Constructing,
    LoggingReady,
    ServerCreated,
    Overridden,
    Running,
    Stopped,
    Failed,
}

impl BootstrapPhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BootstrapPhase::Constructing => "constructing",
            BootstrapPhase::LoggingReady => "logging_ready",
            BootstrapPhase::ServerCreated => "server_created",
            BootstrapPhase::Overridden => "overridden",
            BootstrapPhase::Running => "running",
            BootstrapPhase::Stopped => "stopped",
            BootstrapPhase::Failed => "failed",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, BootstrapPhase::Stopped | BootstrapPhase::Failed)
    }

    /// Whether `next` directly follows `self`. Any live phase may fail.
    pub fn can_advance_to(self, next: BootstrapPhase) -> bool {
        use BootstrapPhase::*;

        if self.is_terminal() {
            return false;
        }
        matches!(
            (self, next),
            (Constructing, LoggingReady)
                | (LoggingReady, ServerCreated)
                | (ServerCreated, Overridden)
                | (Overridden, Running)
                | (Running, Stopped)
                | (_, Failed)
        )
    }
}

/// Tracks the current phase and logs every transition.
#[derive(Debug)]
pub(crate) struct PhaseTracker {
    current: BootstrapPhase,
}

impl PhaseTracker {
    pub(crate) fn new() -> Self {
        Self {
            current: BootstrapPhase::Constructing,
        }
    }

    pub(crate) fn current(&self) -> BootstrapPhase {
        self.current
    }

    pub(crate) fn advance(&mut self, next: BootstrapPhase) {
        debug_assert!(
            self.current.can_advance_to(next),
            "illegal bootstrap transition {:?} -> {:?}",
            self.current,
            next
        );
        debug!(
            target: "mherb_mcp::bootstrap",
            from = self.current.as_str(),
            to = next.as_str(),
            "Bootstrap phase changed"
        );
        self.current = next;
    }
}
