//! MCP handler and transport serving.
mod handler;
mod server_info;
mod startup;

pub use handler::MherbHandler;
pub use server_info::build_instructions;
pub use startup::{serve, RuntimeExit, SSE_PATH};
