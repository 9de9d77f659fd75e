//! Stream history and live-stream status types
//!
//! These mirror the JSON documents the site consumes (`streams_history.json`
//! and the `liveStream` object of `data.json`), so field names follow the
//! camelCase wire format.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{PLATFORM_TWITCH, PLATFORM_YOUTUBE};

/// Broadcast platform of a recorded stream.
///
/// Unknown platform strings are kept as [`Platform::Other`] instead of failing
/// the whole history document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Twitch,
    #[default]
    #[serde(other)]
    Other,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => PLATFORM_YOUTUBE,
            Self::Twitch => PLATFORM_TWITCH,
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded broadcast on a given platform and calendar day.
///
/// `date` is kept as the raw `YYYY-MM-DD` string: grouping is keyed by exact
/// string equality. Missing, null or wrongly typed fields deserialize to
/// empty values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamEvent {
    #[serde(default, deserialize_with = "or_default")]
    pub date: String,
    #[serde(default, deserialize_with = "or_default")]
    pub platform: Platform,
    #[serde(default, deserialize_with = "or_default")]
    pub url: String,
}

impl StreamEvent {
    pub fn new(date: impl Into<String>, platform: Platform, url: impl Into<String>) -> Self {
        Self { date: date.into(), platform, url: url.into() }
    }
}

/// `streams_history.json`
///
/// Entries that are not JSON objects are dropped; the rest of the document
/// still loads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreamHistory {
    #[serde(default, deserialize_with = "lenient_events")]
    pub events: Vec<StreamEvent>,
}

impl StreamHistory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether an event for this exact date and platform is already recorded.
    pub fn contains(&self, date: &str, platform: Platform) -> bool {
        self.events.iter().any(|e| e.date == date && e.platform == platform)
    }
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(raw).unwrap_or_default())
}

fn lenient_events<'de, D>(deserializer: D) -> Result<Vec<StreamEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw.into_iter().filter_map(|entry| StreamEvent::deserialize(entry).ok()).collect())
}

/// An active Twitch broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitchLive {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub twitch_channel_name: String,
}

/// Current live-stream status, tagged by `type`.
///
/// YouTube is the primary platform: when both are live, the Twitch stream is
/// attached to the YouTube variant as `twitchLive`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LiveStream {
    #[default]
    #[serde(rename = "none")]
    Offline,
    Youtube {
        #[serde(default)]
        id: String,
        #[serde(default)]
        title: String,
        #[serde(rename = "youtubeChannelId", default, skip_serializing_if = "Option::is_none")]
        youtube_channel_id: Option<String>,
        #[serde(rename = "twitchLive", default, skip_serializing_if = "Option::is_none")]
        twitch_live: Option<TwitchLive>,
    },
    Twitch(TwitchLive),
}

impl LiveStream {
    pub fn is_live(&self) -> bool {
        !matches!(self, Self::Offline)
    }

    /// Id of the live YouTube video, if YouTube is the primary stream.
    pub fn youtube_video_id(&self) -> Option<&str> {
        match self {
            Self::Youtube { id, .. } if !id.is_empty() => Some(id),
            _ => None,
        }
    }

    /// The Twitch broadcast, whether primary or attached to a YouTube stream.
    pub fn twitch(&self) -> Option<&TwitchLive> {
        match self {
            Self::Twitch(tw) => Some(tw),
            Self::Youtube { twitch_live, .. } => twitch_live.as_ref(),
            Self::Offline => None,
        }
    }
}
