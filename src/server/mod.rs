//! Server-side modules: configuration, creation, metadata and transport runtime.
pub mod config;
pub mod factory;
pub mod metadata;
pub mod runtime;
