//! Commands run by the `creatorhub` binary

pub mod build;
pub mod update;

pub use build::{run_build, BuildOptions};
pub use update::run_update;
