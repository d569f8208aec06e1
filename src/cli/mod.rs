//! Launcher entry arguments and the fixed SSE launch profile.
pub mod args;
pub mod profile;

pub use args::LaunchArgs;
pub use profile::{
    sse_launch_config, SSE_ALLOW_CORS, SSE_DATABASE_PATH, SSE_HOST, SSE_LOG_LEVEL,
    SSE_METADATA_PATH, SSE_PORT,
};
