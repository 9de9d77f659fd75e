//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading site configuration from files.

use std::io::Write;

use creatorhub_domain::{HubError, Locale, Theme};
use creatorhub_infra::config;
use tempfile::NamedTempFile;

/// Write `contents` next to a fresh temp file, under the given extension.
fn config_file(contents: &str, extension: &str) -> std::path::PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let path = config_file(
        r#"{
            "site": { "default_locale": "en", "default_theme": "light", "stream_weekday": 5 },
            "sections": { "minecraft_skin": false, "development_mode": true },
            "profile": { "support_url": "https://boosty.to/someone" },
            "links": [
                {
                    "label_key": "telegramChannelLabel",
                    "url": "https://t.me/someone",
                    "icon": "send",
                    "order": 2,
                    "is_social": true,
                    "show_subscriber_count": true,
                    "platform_id": "telegram"
                }
            ],
            "strings": { "en": { "profileName": "Someone" } }
        }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load config from JSON file");

    assert_eq!(config.site.default_locale, Locale::En);
    assert_eq!(config.site.default_theme, Theme::Light);
    assert_eq!(config.site.stream_weekday, 5);
    assert!(!config.sections.minecraft_skin);
    assert!(config.sections.development_mode);
    assert!(config.sections.links, "unspecified flags keep their defaults");
    assert_eq!(config.profile.support_url.as_deref(), Some("https://boosty.to/someone"));
    assert_eq!(config.links.len(), 1);
    assert!(config.links[0].counts_followers());
    assert_eq!(config.strings["en"]["profileName"], "Someone");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() {
    let path = config_file(
        r#"
[site]
data_path = "public/data.json"
history_path = "public/streams_history.json"
embed_parent = "someone.github.io"

[home.links]
youtube_subscribe_url = "https://youtube.com/@someone?sub_confirmation=1"

[home.locales.ru.ui]
nav_title = "Навигация"

[[home.locales.ru.texts.timeline]]
year = "2019"
title = "Первый стрим"
body = "Всё началось здесь."
"#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load config from TOML file");

    assert_eq!(config.site.data_path, "public/data.json");
    assert_eq!(config.site.history_path, "public/streams_history.json");
    assert_eq!(config.site.embed_parent, "someone.github.io");
    assert_eq!(config.site.default_locale, Locale::Ru);
    assert!(config.home.links.youtube_subscribe_url.ends_with("sub_confirmation=1"));

    let ru = config.home_content(Locale::Ru);
    assert_eq!(ru.ui.nav_title, "Навигация");
    assert_eq!(ru.texts.timeline[0].title, "Первый стрим");
    // No English block: falls back to the default locale.
    assert_eq!(config.home_content(Locale::En), ru);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_with_minimal_fields() {
    let path = config_file("{}", "json");

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load minimal config");
    assert_eq!(config, Default::default());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_nonexistent_file() {
    let result = config::load_from_file(Some("/nonexistent/path/creatorhub.json".into()));

    match result {
        Err(HubError::Config(msg)) => {
            assert!(msg.contains("not found"), "Error message should mention 'not found'");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_with_invalid_format() {
    let path = config_file(r#"{ "links": [ "#, "json");

    match config::load_from_file(Some(path.clone())) {
        Err(HubError::Config(msg)) => {
            assert!(msg.contains("Invalid JSON"), "Error message should mention invalid JSON");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }

    std::fs::remove_file(path).ok();
}
