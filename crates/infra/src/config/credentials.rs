//! Platform API credentials
//!
//! Read from the environment (usually CI secrets or a local `.env`). A
//! platform whose variables are not all set is skipped by the updater; that
//! is reported as a setup warning, never as an error.
//!
//! ## Environment Variables
//! - YouTube: `YOUTUBE_API_KEY`, `YOUR_YOUTUBE_CHANNEL_ID`
//! - Twitch: `TWITCH_CLIENT_ID`, `TWITCH_CLIENT_SECRET`, `YOUR_TWITCH_USERNAME`
//! - VK: `YOUR_VK_GROUP_ID` + `VK_GROUP_ACCESS_TOKEN`, `YOUR_VK_USER_ID` +
//!   `VK_USER_ACCESS_TOKEN`
//! - Telegram: `TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHANNEL_CHAT_ID`
//! - Instagram: `INSTAGRAM_BUSINESS_ACCOUNT_ID`, `INSTAGRAM_ACCESS_TOKEN`
//! - X: `YOUR_X_USER_ID`, `X_BEARER_TOKEN`
//! - TikTok: `YOUR_TIKTOK_USERNAME`, `TIKAPI_IO_API_KEY`

use std::fmt;

use creatorhub_domain::constants::{
    PLATFORM_INSTAGRAM, PLATFORM_TELEGRAM, PLATFORM_TIKTOK, PLATFORM_TWITCH, PLATFORM_VK_GROUP, PLATFORM_VK_PERSONAL,
    PLATFORM_X, PLATFORM_YOUTUBE,
};

/// A secret that never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeCredentials {
    pub api_key: Secret,
    pub channel_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitchCredentials {
    pub client_id: String,
    pub client_secret: Secret,
    pub username: String,
}

/// Used for both the VK community and the personal page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VkCredentials {
    pub owner_id: String,
    pub access_token: Secret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramCredentials {
    pub bot_token: Secret,
    pub chat_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstagramCredentials {
    pub business_account_id: String,
    pub access_token: Secret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XCredentials {
    pub user_id: String,
    pub bearer_token: Secret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TikTokCredentials {
    pub username: String,
    pub api_key: Secret,
}

/// Every platform's credentials; `None` where something is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub youtube: Option<YoutubeCredentials>,
    pub twitch: Option<TwitchCredentials>,
    pub vk_group: Option<VkCredentials>,
    pub vk_personal: Option<VkCredentials>,
    pub telegram: Option<TelegramCredentials>,
    pub instagram: Option<InstagramCredentials>,
    pub x: Option<XCredentials>,
    pub tiktok: Option<TikTokCredentials>,
}

impl Credentials {
    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let youtube = match (var("YOUTUBE_API_KEY"), var("YOUR_YOUTUBE_CHANNEL_ID")) {
            (Some(key), Some(channel_id)) => Some(YoutubeCredentials { api_key: Secret::new(key), channel_id }),
            _ => None,
        };
        let twitch = match (var("TWITCH_CLIENT_ID"), var("TWITCH_CLIENT_SECRET"), var("YOUR_TWITCH_USERNAME")) {
            (Some(client_id), Some(secret), Some(username)) => {
                Some(TwitchCredentials { client_id, client_secret: Secret::new(secret), username })
            }
            _ => None,
        };
        let vk = |id_key: &str, token_key: &str| match (var(id_key), var(token_key)) {
            (Some(owner_id), Some(token)) => Some(VkCredentials { owner_id, access_token: Secret::new(token) }),
            _ => None,
        };
        let telegram = match (var("TELEGRAM_BOT_TOKEN"), var("TELEGRAM_CHANNEL_CHAT_ID")) {
            (Some(token), Some(chat_id)) => Some(TelegramCredentials { bot_token: Secret::new(token), chat_id }),
            _ => None,
        };
        let instagram = match (var("INSTAGRAM_BUSINESS_ACCOUNT_ID"), var("INSTAGRAM_ACCESS_TOKEN")) {
            (Some(business_account_id), Some(token)) => {
                Some(InstagramCredentials { business_account_id, access_token: Secret::new(token) })
            }
            _ => None,
        };
        let x = match (var("YOUR_X_USER_ID"), var("X_BEARER_TOKEN")) {
            (Some(user_id), Some(token)) => Some(XCredentials { user_id, bearer_token: Secret::new(token) }),
            _ => None,
        };
        let tiktok = match (var("YOUR_TIKTOK_USERNAME"), var("TIKAPI_IO_API_KEY")) {
            (Some(username), Some(key)) => Some(TikTokCredentials { username, api_key: Secret::new(key) }),
            _ => None,
        };

        Self {
            youtube,
            twitch,
            vk_group: vk("YOUR_VK_GROUP_ID", "VK_GROUP_ACCESS_TOKEN"),
            vk_personal: vk("YOUR_VK_USER_ID", "VK_USER_ACCESS_TOKEN"),
            telegram,
            instagram,
            x,
            tiktok,
        }
    }

    /// `(platform id, message)` for every platform that will be skipped.
    pub fn setup_warnings(&self) -> Vec<(&'static str, String)> {
        let mut warnings = Vec::new();
        let mut check = |configured: bool, platform: &'static str, name: &str, vars: &str| {
            if !configured {
                warnings.push((
                    platform,
                    format!(
                        "{name} API credentials ({vars}) are missing. {name} follower count will not be updated automatically."
                    ),
                ));
            }
        };

        check(self.youtube.is_some(), PLATFORM_YOUTUBE, "YouTube", "API_KEY, CHANNEL_ID");
        check(self.twitch.is_some(), PLATFORM_TWITCH, "Twitch", "CLIENT_ID, CLIENT_SECRET, USERNAME");
        check(self.vk_group.is_some(), PLATFORM_VK_GROUP, "VK group", "GROUP_ID, GROUP_ACCESS_TOKEN");
        check(self.vk_personal.is_some(), PLATFORM_VK_PERSONAL, "VK personal", "USER_ID, USER_ACCESS_TOKEN");
        check(self.telegram.is_some(), PLATFORM_TELEGRAM, "Telegram", "BOT_TOKEN, CHANNEL_CHAT_ID");
        check(self.instagram.is_some(), PLATFORM_INSTAGRAM, "Instagram", "BUSINESS_ACCOUNT_ID, ACCESS_TOKEN");
        check(self.x.is_some(), PLATFORM_X, "X (Twitter)", "USER_ID, BEARER_TOKEN");
        check(self.tiktok.is_some(), PLATFORM_TIKTOK, "TikTok", "username, API Key for TikAPI.io");
        warnings
    }
}

/// Read every platform's credentials from the process environment.
pub fn load_credentials_from_env() -> Credentials {
    let credentials = Credentials::from_lookup(|key| std::env::var(key).ok());
    tracing::debug!(missing = credentials.setup_warnings().len(), "Platform credentials loaded from environment");
    credentials
}
