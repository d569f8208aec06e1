use clap::Parser;

/// Command-line arguments. The launcher takes none; clap provides `--help` and `--version`.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Run the mherb MCP server over SSE on 0.0.0.0:8000 with CORS enabled",
    long_about = None
)]
pub struct LaunchArgs {}
