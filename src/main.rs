//! Entry point: run the mherb MCP server over SSE.
use std::process::ExitCode;

use clap::Parser;
use mherb_mcp::{
    bootstrap::{self, Bootstrap, Interrupt},
    cli::{sse_launch_config, LaunchArgs},
    server::factory::DefaultServerFactory,
};

#[tokio::main]
async fn main() -> ExitCode {
    let _args = LaunchArgs::parse();
    let interrupt = Interrupt::install();

    let config = sse_launch_config();
    let result = Bootstrap::new(config, DefaultServerFactory::default())
        .run(interrupt.triggered())
        .await;
    bootstrap::finish(result)
}
