//! Ctrl+C handling, registered before the bootstrap starts.
//!
//! The handler is installed at process start so an interrupt during logging setup or server
//! creation still ends in a clean stop. Once the controller awaits [`Interrupt::triggered`], a
//! signal is handed to it and the run is classified as usual. Before that point the watcher stops
//! the process itself, since server creation may be blocked in synchronous I/O.
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::Notify;
use tracing::{info, warn};

use super::outcome::SHUTDOWN_NOTICE;

#[cfg(unix)]
type Listener = tokio::signal::unix::Signal;
#[cfg(windows)]
type Listener = tokio::signal::windows::CtrlC;

#[cfg(unix)]
fn listen() -> std::io::Result<Listener> {
    use tokio::signal::unix::{signal, SignalKind};
    signal(SignalKind::interrupt())
}

#[cfg(windows)]
fn listen() -> std::io::Result<Listener> {
    tokio::signal::windows::ctrl_c()
}

#[derive(Debug, Default)]
struct InterruptState {
    armed: AtomicBool,
    notify: Notify,
}

/// Process-wide interrupt handle shared between the signal watcher and the controller.
#[derive(Debug, Clone)]
pub struct Interrupt {
    state: Arc<InterruptState>,
    listening: bool,
}

impl Default for Interrupt {
    fn default() -> Self {
        Self {
            state: Arc::default(),
            listening: true,
        }
    }
}

impl Interrupt {
    /// Register the Ctrl+C handler and spawn its watcher. Must be called inside the runtime.
    pub fn install() -> Self {
        match listen() {
            Ok(listener) => {
                let interrupt = Self::default();
                tokio::spawn(interrupt.clone().watch(listener));
                interrupt
            }
            Err(err) => {
                // Logging is not up yet; report it from `triggered` instead.
                eprintln!("Failed to listen for Ctrl+C: {err}");
                Self {
                    listening: false,
                    ..Self::default()
                }
            }
        }
    }

    /// Resolves on the first interrupt delivered after this future is first polled.
    ///
    /// Never resolves if the handler could not be installed, so a signal-setup failure is not
    /// mistaken for an operator stop.
    pub async fn triggered(&self) {
        if !self.listening {
            warn!(
                target: "mherb_mcp::bootstrap",
                "Ctrl+C handler is not installed; interrupt handling is disabled"
            );
            std::future::pending::<()>().await;
        }
        self.state.armed.store(true, Ordering::SeqCst);
        self.state.notify.notified().await;
    }

    pub fn is_armed(&self) -> bool {
        self.state.armed.load(Ordering::SeqCst)
    }

    /// Hand a received signal to the controller. Returns `false` if nothing is waiting yet.
    pub(crate) fn on_signal(&self) -> bool {
        if !self.is_armed() {
            return false;
        }
        self.state.notify.notify_one();
        true
    }

    async fn watch(self, mut listener: Listener) {
        while listener.recv().await.is_some() {
            if !self.on_signal() {
                stop_before_run();
            }
        }
    }
}

fn stop_before_run() -> ! {
    info!(target: "mherb_mcp::bootstrap", "Server stopped by user");
    eprintln!("{SHUTDOWN_NOTICE}");
    std::process::exit(0)
}
