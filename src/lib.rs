//! Library crate root for the mherb MCP launcher.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod bootstrap;
pub mod cli;
pub mod server;
