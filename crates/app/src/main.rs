//! creatorhub - link-in-bio site generator
//!
//! Main entry point for the command-line application.

// `help` prints usage to stdout; everything else goes through tracing.
#![allow(clippy::print_stdout)]

use std::process::ExitCode;

use anyhow::Context;
use creatorhub_app::cli::USAGE;
use creatorhub_app::utils::logging::init_tracing;
use creatorhub_app::{parse_args, run_build, run_update, AppContext, Command};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before the subscriber so RUST_LOG from the file applies
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "Could not load .env file"),
    }

    match run(std::env::args().skip(1)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "creatorhub failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: impl Iterator<Item = String>) -> anyhow::Result<()> {
    match parse_args(args)? {
        Command::Help => {
            println!("{USAGE}");
        }
        Command::Update { config } => {
            let context = AppContext::new(config).context("Failed to initialise application")?;
            let report = run_update(&context).await.context("Update failed")?;
            info!(
                updated = ?report.updated,
                errors = report.errors.len(),
                live = report.live,
                "Update finished"
            );
        }
        Command::Build { config, options } => {
            let context = AppContext::new(config).context("Failed to initialise application")?;
            let written = run_build(&context, &options).await.context("Build failed")?;
            info!(pages = written.len(), "Build finished");
        }
    }
    Ok(())
}
