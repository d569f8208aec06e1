use std::{
    io,
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use anyhow::anyhow;
use mherb_mcp::{
    lib::{
        errors::{ServerCreationError, ServerError},
        telemetry,
    },
    server::{
        config::{LogLevel, ServerConfig, TransportKind},
        factory::{ManagedServer, ServerFactory},
        metadata,
    },
};
use tracing::subscriber::DefaultGuard;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_mherb-mcp");

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// In-memory log sink shared between a subscriber and the test.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Install a thread-local subscriber writing into this buffer.
    pub fn install(&self, level: LogLevel) -> DefaultGuard {
        let config = ServerConfig {
            log_level: level,
            ..ServerConfig::default()
        };
        let writer = self.clone();
        tracing::subscriber::set_default(telemetry::build_subscriber(&config, move || {
            writer.clone()
        }))
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer lock").clone();
        String::from_utf8(bytes).expect("utf-8 log output")
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().expect("log buffer lock").is_empty()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer lock")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// What a [`FakeServer`] does once `run` is called.
#[derive(Debug, Clone, Copy)]
pub enum RunBehavior {
    /// Block until the controller's interrupt fires.
    Pending,
    /// Return a runtime error carrying this message.
    Fail(&'static str),
    /// Report an interrupt from inside the server.
    Interrupted,
    /// Return cleanly.
    Return,
}

/// Snapshot taken at the moment `run` was entered.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub transport: TransportKind,
    pub config: ServerConfig,
    pub logs_at_run: String,
}

#[derive(Clone, Default)]
pub struct RunTracker {
    record: Arc<Mutex<Option<RunRecord>>>,
    creations: Arc<AtomicUsize>,
}

impl RunTracker {
    pub fn record(&self) -> Option<RunRecord> {
        self.record.lock().expect("tracker lock").clone()
    }

    pub fn creations(&self) -> usize {
        self.creations.load(Ordering::SeqCst)
    }
}

pub struct FakeServer {
    config: ServerConfig,
    behavior: RunBehavior,
    tracker: RunTracker,
    logs: CapturedLogs,
}

impl ManagedServer for FakeServer {
    fn config(&self) -> &ServerConfig {
        &self.config
    }

    fn set_config(&mut self, config: ServerConfig) {
        self.config = config;
    }

    async fn run(self, transport: TransportKind) -> Result<(), ServerError> {
        *self.tracker.record.lock().expect("tracker lock") = Some(RunRecord {
            transport,
            config: self.config.clone(),
            logs_at_run: self.logs.contents(),
        });
        match self.behavior {
            RunBehavior::Pending => std::future::pending().await,
            RunBehavior::Fail(message) => Err(ServerError::Runtime(anyhow!(message))),
            RunBehavior::Interrupted => Err(ServerError::Interrupted),
            RunBehavior::Return => Ok(()),
        }
    }
}

/// Factory whose defaults deliberately disagree with the SSE launch profile.
pub struct FakeFactory {
    pub defaults: ServerConfig,
    pub behavior: RunBehavior,
    pub fail_creation: bool,
    pub tracker: RunTracker,
    pub logs: CapturedLogs,
}

impl FakeFactory {
    pub fn new(behavior: RunBehavior, logs: &CapturedLogs) -> Self {
        Self {
            defaults: factory_defaults(),
            behavior,
            fail_creation: false,
            tracker: RunTracker::default(),
            logs: logs.clone(),
        }
    }
}

pub fn factory_defaults() -> ServerConfig {
    ServerConfig {
        transport: TransportKind::Stdio,
        host: "127.0.0.1".into(),
        port: 3000,
        log_level: LogLevel::Warn,
        database_path: PathBuf::from("factory/catalogue.db"),
        metadata_path: PathBuf::from("factory/metadata.json"),
        allow_cors: false,
        server_name: "fake-server".into(),
        source_path: None,
    }
}

impl ServerFactory for FakeFactory {
    type Server = FakeServer;

    fn create_server(&self) -> Result<FakeServer, ServerCreationError> {
        self.tracker.creations.fetch_add(1, Ordering::SeqCst);
        tracing::info!(target: "mherb_mcp::tests", "fake factory creating server");
        if self.fail_creation {
            metadata::load_metadata(&fixture("tests/fixtures/metadata_malformed.json"))?;
        }
        Ok(FakeServer {
            config: self.defaults.clone(),
            behavior: self.behavior,
            tracker: self.tracker.clone(),
            logs: self.logs.clone(),
        })
    }
}
