//! YouTube Data API v3 client
//!
//! Subscriber count, recent uploads and live status of one channel. All
//! three share the API key and channel id.

use std::collections::HashMap;

use async_trait::async_trait;
use creatorhub_core::{FollowerSource, LiveStatusSource, VideoFeed};
use creatorhub_domain::constants::PLATFORM_YOUTUBE;
use creatorhub_domain::{HubError, LiveStream, Result, YoutubeVideo};
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::YoutubeCredentials;
use crate::http::HttpClient;

const YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Thumbnail sizes, best first.
const THUMBNAIL_PREFERENCE: [&str; 5] = ["maxres", "standard", "high", "medium", "default"];

pub struct YouTubeClient {
    http_client: HttpClient,
    credentials: YoutubeCredentials,
    api_url: String,
}

impl YouTubeClient {
    pub fn new(credentials: YoutubeCredentials, http_client: HttpClient) -> Self {
        Self { http_client, credentials, api_url: YOUTUBE_API_URL.to_string() }
    }

    /// Point the client at another API root (tests, proxies).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn channel_id(&self) -> &str {
        &self.credentials.channel_id
    }

    async fn get<T>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = self
            .http_client
            .request(Method::GET, format!("{}/{}", self.api_url, endpoint))
            .query(params)
            .query(&[("key", self.credentials.api_key.expose())]);
        self.http_client.send_json(request).await
    }

    /// Current subscriber count. The API reports it as a decimal string.
    pub async fn subscriber_count(&self) -> Result<u64> {
        let response: ListResponse<ChannelStatisticsItem> =
            self.get("channels", &[("part", "statistics"), ("id", self.channel_id())]).await?;

        let item = response.items.into_iter().next().ok_or_else(|| self.channel_not_found())?;
        item.statistics
            .subscriber_count
            .trim()
            .parse::<u64>()
            .map_err(|e| HubError::Parse(format!("Invalid YouTube subscriberCount: {}", e)))
    }

    /// The newest uploads of the channel, taken from its uploads playlist.
    pub async fn uploads(&self, max_results: u32) -> Result<Vec<YoutubeVideo>> {
        let channel: ListResponse<ChannelContentItem> =
            self.get("channels", &[("part", "contentDetails"), ("id", self.channel_id())]).await?;
        let playlist_id = channel
            .items
            .into_iter()
            .next()
            .map(|item| item.content_details.related_playlists.uploads)
            .ok_or_else(|| self.channel_not_found())?;

        let max_results = max_results.to_string();
        let playlist: ListResponse<PlaylistItem> = self
            .get(
                "playlistItems",
                &[("part", "snippet"), ("playlistId", playlist_id.as_str()), ("maxResults", max_results.as_str())],
            )
            .await?;

        let videos: Vec<YoutubeVideo> = playlist.items.into_iter().map(PlaylistItem::into_video).collect();
        debug!(playlist = %playlist_id, count = videos.len(), "Fetched YouTube uploads");
        Ok(videos)
    }

    /// The channel's current live broadcast, if any.
    pub async fn current_broadcast(&self) -> Result<LiveStream> {
        let response: ListResponse<SearchItem> = self
            .get(
                "search",
                &[("part", "snippet"), ("channelId", self.channel_id()), ("eventType", "live"), ("type", "video")],
            )
            .await?;

        let Some(item) = response.items.into_iter().next() else {
            return Ok(LiveStream::Offline);
        };
        info!(video_id = %item.id.video_id, "YouTube channel is live");
        Ok(LiveStream::Youtube {
            id: item.id.video_id,
            title: item.snippet.title,
            youtube_channel_id: Some(self.credentials.channel_id.clone()),
            twitch_live: None,
        })
    }

    fn channel_not_found(&self) -> HubError {
        HubError::NotFound(format!("No YouTube channel data found for {}", self.credentials.channel_id))
    }
}

#[async_trait]
impl FollowerSource for YouTubeClient {
    fn platform_id(&self) -> &str {
        PLATFORM_YOUTUBE
    }

    async fn follower_count(&self) -> Result<u64> {
        self.subscriber_count().await
    }
}

#[async_trait]
impl VideoFeed for YouTubeClient {
    async fn recent_videos(&self, max_results: u32) -> Result<Vec<YoutubeVideo>> {
        self.uploads(max_results).await
    }
}

#[async_trait]
impl LiveStatusSource for YouTubeClient {
    fn platform_id(&self) -> &str {
        PLATFORM_YOUTUBE
    }

    async fn live_status(&self) -> Result<LiveStream> {
        self.current_broadcast().await
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ChannelStatisticsItem {
    statistics: ChannelStatistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelStatistics {
    subscriber_count: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelContentItem {
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: String,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    snippet: PlaylistSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistSnippet {
    #[serde(default)]
    title: String,
    resource_id: ResourceId,
    #[serde(default)]
    thumbnails: HashMap<String, Thumbnail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl PlaylistItem {
    fn into_video(self) -> YoutubeVideo {
        let PlaylistSnippet { title, resource_id, mut thumbnails } = self.snippet;
        let thumbnail_url =
            THUMBNAIL_PREFERENCE.iter().find_map(|size| thumbnails.remove(*size)).map(|thumb| thumb.url);
        YoutubeVideo { id: resource_id.video_id, title, thumbnail_url }
    }
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchId,
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchId {
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct SearchSnippet {
    #[serde(default)]
    title: String,
}
