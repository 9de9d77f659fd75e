//! Site configuration loader
//!
//! Loads [`SiteConfig`] from a TOML or JSON file.
//!
//! ## Loading Strategy
//! 1. An explicit path (command line) wins
//! 2. Otherwise `CREATORHUB_CONFIG` names the file
//! 3. Otherwise multiple paths are probed for config files
//! 4. If nothing is found, built-in defaults are used
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./creatorhub.toml`, `./creatorhub.json`, `./site.toml`, `./site.json`
//! 2. The same names in `../` and `../../`
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use creatorhub_domain::{HubError, Result, SiteConfig};

/// Environment variable overriding the config path.
pub const CONFIG_PATH_ENV: &str = "CREATORHUB_CONFIG";

const CONFIG_FILE_NAMES: [&str; 4] = ["creatorhub.toml", "creatorhub.json", "site.toml", "site.json"];

/// Load the site configuration with the fallback strategy above.
///
/// # Errors
/// Returns `HubError::Config` if a named file is missing or a found file
/// cannot be parsed. Finding no file at all is not an error.
pub fn load(path: Option<PathBuf>) -> Result<SiteConfig> {
    if let Some(path) = path {
        return load_from_file(Some(path));
    }

    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        tracing::debug!(env = CONFIG_PATH_ENV, "Config path taken from environment");
        return load_from_file(Some(PathBuf::from(path)));
    }

    match probe_config_paths() {
        Some(found) => load_from_file(Some(found)),
        None => {
            tracing::warn!("No site config file found, using built-in defaults");
            Ok(SiteConfig::default())
        }
    }
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `HubError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<SiteConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(HubError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            HubError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading site configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| HubError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content.
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<SiteConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| HubError::Config(format!("Invalid TOML format: {}", e))),
        "json" => {
            serde_json::from_str(contents).map_err(|e| HubError::Config(format!("Invalid JSON format: {}", e)))
        }
        _ => Err(HubError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
        roots.push(cwd.join("../.."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    candidates_in(&roots).into_iter().find(|path| path.exists())
}

fn candidates_in(roots: &[PathBuf]) -> Vec<PathBuf> {
    roots.iter().flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name))).collect()
}
