//! # creatorhub App
//!
//! Command-line application layer.
//!
//! This crate contains:
//! - Argument parsing for the `update` and `build` commands
//! - Application context (dependency injection)
//! - Logging setup and command logging helpers
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires platform clients and stores into the core services

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use cli::{parse_args, Command};
pub use commands::{run_build, run_update, BuildOptions};
pub use context::AppContext;
