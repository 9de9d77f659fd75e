//! Configuration loading
//!
//! Site configuration comes from a TOML/JSON file, API credentials from the
//! environment.

pub mod credentials;
pub mod loader;

pub use credentials::{
    load_credentials_from_env, Credentials, InstagramCredentials, Secret, TelegramCredentials, TikTokCredentials,
    TwitchCredentials, VkCredentials, XCredentials, YoutubeCredentials,
};
pub use loader::{load, load_from_file, probe_config_paths, CONFIG_PATH_ENV};
