//! `data.json`: follower counts, recent videos, live status
//!
//! The file is produced by the updater and may also be edited by hand, so
//! deserialization is lenient: non-numeric follower counts are dropped and
//! `lastUpdated` accepts both RFC 3339 and naive ISO timestamps.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::stream::LiveStream;

/// Follower counts keyed by platform id (`youtube`, `vk_group`, ...).
pub type FollowerCounts = BTreeMap<String, u64>;

/// A recent upload shown in the videos carousel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeVideo {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl YoutubeVideo {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    #[serde(default, deserialize_with = "lenient_counts")]
    pub follower_counts: FollowerCounts,
    #[serde(default)]
    pub youtube_videos: Vec<YoutubeVideo>,
    #[serde(default)]
    pub live_stream: LiveStream,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub debug_info: BTreeMap<String, String>,
}

impl SiteData {
    /// The value used whenever `data.json` is missing or unreadable.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn count(&self, platform_id: &str) -> Option<u64> {
        self.follower_counts.get(platform_id).copied()
    }

    pub fn latest_video(&self) -> Option<&YoutubeVideo> {
        self.youtube_videos.first()
    }
}

fn lenient_counts<'de, D>(deserializer: D) -> Result<FollowerCounts, D::Error>
where
    D: Deserializer<'de>,
{
    let raw =
        Option::<BTreeMap<String, serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|(platform, value)| {
            let count = value.as_u64().or_else(|| {
                value.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)
            })?;
            Some((platform, count))
        })
        .collect())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| parse_timestamp(&s)))
}

/// Parse RFC 3339, falling back to a naive ISO timestamp interpreted as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok().map(|naive| naive.and_utc())
}
