//! Site configuration records
//!
//! Everything the renderer needs that is not fetched data: section flags,
//! profile, link cards, localized home content and UI string overrides.
//! All records default field by field so a config file only has to name what
//! it changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATA_PATH, DEFAULT_EMBED_PARENT, DEFAULT_HISTORY_PATH, DEFAULT_LINKS_PAGE_URL,
    DEFAULT_OUTPUT_DIR, DEFAULT_STREAM_WEEKDAY_INDEX,
};
use crate::types::{Locale, Theme};

/// Root of `creatorhub.toml` / `creatorhub.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSettings,
    pub sections: SectionFlags,
    pub profile: ProfileConfig,
    pub links: Vec<LinkConfig>,
    pub home: HomeConfig,
    /// UI string overrides, keyed by locale code then string key.
    pub strings: BTreeMap<String, BTreeMap<String, String>>,
}

impl SiteConfig {
    /// Localized home content, falling back to the default locale.
    pub fn home_content(&self, locale: Locale) -> HomeContent {
        self.home
            .locales
            .get(locale.as_str())
            .or_else(|| self.home.locales.get(self.site.default_locale.as_str()))
            .cloned()
            .unwrap_or_default()
    }
}

/// Paths and rendering defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub data_path: String,
    pub history_path: String,
    pub output_dir: String,
    pub default_locale: Locale,
    pub default_theme: Theme,
    /// Scheduled stream day, 0 = Monday ... 6 = Sunday.
    pub stream_weekday: u32,
    /// Host passed to the Twitch player as `parent`.
    pub embed_parent: String,
    /// Public URL the site is served from. Its host becomes the Twitch
    /// `parent` while `embed_parent` keeps its default.
    pub base_url: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            history_path: DEFAULT_HISTORY_PATH.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            default_locale: Locale::default(),
            default_theme: Theme::default(),
            stream_weekday: DEFAULT_STREAM_WEEKDAY_INDEX,
            embed_parent: DEFAULT_EMBED_PARENT.to_string(),
            base_url: None,
        }
    }
}

/// Which sections of the pages are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionFlags {
    pub live_stream: bool,
    pub profile: bool,
    pub minecraft_skin: bool,
    pub links: bool,
    pub youtube_videos: bool,
    pub support_button: bool,
    /// Emit `dev.html` with the raw data dump.
    pub development_mode: bool,
}

impl Default for SectionFlags {
    fn default() -> Self {
        Self {
            live_stream: true,
            profile: true,
            minecraft_skin: true,
            links: true,
            youtube_videos: true,
            support_button: true,
            development_mode: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name_key: String,
    pub description_key: String,
    pub avatar: String,
    pub minecraft_skin_url: String,
    pub support_url: Option<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name_key: "profileName".to_string(),
            description_key: "profileDescription".to_string(),
            avatar: "./assets/avatar.png".to_string(),
            minecraft_skin_url: "./assets/skin.png".to_string(),
            support_url: None,
        }
    }
}

/// One card on the links page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub label_key: String,
    pub url: String,
    /// Material Symbols icon name, ignored when `custom_icon_url` is set.
    pub icon: String,
    pub custom_icon_url: Option<String>,
    pub order: i32,
    pub is_social: bool,
    pub show_subscriber_count: bool,
    /// Key into `followerCounts`.
    pub platform_id: Option<String>,
    /// Opened on a right swipe.
    pub subscribe_url: Option<String>,
    pub active: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            label_key: String::new(),
            url: String::new(),
            icon: "link".to_string(),
            custom_icon_url: None,
            order: 0,
            is_social: false,
            show_subscriber_count: false,
            platform_id: None,
            subscribe_url: None,
            active: true,
        }
    }
}

impl LinkConfig {
    /// Whether the card contributes to the linked follower total.
    pub fn counts_followers(&self) -> bool {
        self.active && self.is_social && self.show_subscriber_count
    }
}

/// Home page configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub links: HomeLinks,
    /// Localized content keyed by locale code.
    pub locales: BTreeMap<String, HomeContent>,
}

/// Hero call-to-action targets. Empty URLs hide their button.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeLinks {
    pub links_page_url: String,
    pub youtube_channel_url: String,
    pub youtube_subscribe_url: String,
    pub support_url: String,
    pub telegram_url: String,
    pub contact_email: String,
}

impl HomeLinks {
    pub fn links_page_url_or_default(&self) -> &str {
        if self.links_page_url.is_empty() {
            DEFAULT_LINKS_PAGE_URL
        } else {
            &self.links_page_url
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeContent {
    pub ui: HomeUi,
    pub texts: HomeTexts,
}

/// Block titles and captions of the home page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeUi {
    pub nav_title: String,
    pub nav_desc: String,
    pub nav_cta: String,
    pub skin_title: String,
    pub skin_download: String,
    pub videos_title: String,
    pub twitch_also: String,
    pub twitch_cta: String,
    pub followers_label: String,
    pub timeline_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeTexts {
    pub hero_tagline: String,
    pub about_intro: String,
    pub timeline: Vec<TimelineEntry>,
    pub about_outro: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub body: String,
}
