//! Command-line arguments

use std::path::PathBuf;

use anyhow::{anyhow, bail};
use creatorhub_domain::Theme;

use crate::commands::BuildOptions;

pub const USAGE: &str = "\
creatorhub - link-in-bio site generator

USAGE:
    creatorhub <COMMAND> [OPTIONS]

COMMANDS:
    update    Refresh follower counts, videos and live status in data.json
    build     Render the static site
    help      Show this help message

OPTIONS:
    --config <PATH>       Site config file (TOML or JSON)
    --out <DIR>           Output directory (build only)
    --mock-live <SPEC>    none | youtube:ID | twitch:CHANNEL | both:ID:CHANNEL (build only)
    --theme <THEME>       dark | light (build only)
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Update { config: Option<PathBuf> },
    Build { config: Option<PathBuf>, options: BuildOptions },
    Help,
}

/// Parse the arguments after the program name.
pub fn parse_args<I>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = args.next();

    let mut config = None;
    let mut options = BuildOptions::default();
    let is_build = command.as_deref() == Some("build");

    while let Some(flag) = args.next() {
        let mut value = || args.next().ok_or_else(|| anyhow!("Missing value for {flag}"));
        match flag.as_str() {
            "--config" => config = Some(PathBuf::from(value()?)),
            "--out" if is_build => options.out_dir = Some(PathBuf::from(value()?)),
            "--mock-live" if is_build => options.mock_live = Some(value()?),
            "--theme" if is_build => {
                let theme = value()?.parse::<Theme>().map_err(|e| anyhow!("Invalid --theme: {e}"))?;
                options.theme = Some(theme);
            }
            other => bail!("Unexpected argument: {other}"),
        }
    }

    match command.as_deref() {
        Some("update") => Ok(Command::Update { config }),
        Some("build") => Ok(Command::Build { config, options }),
        Some("help") | Some("--help") | Some("-h") | None => Ok(Command::Help),
        Some(unknown) => bail!("Unknown command: {unknown}"),
    }
}
