//! Port interfaces for the data update service
//!
//! Platform clients and JSON stores in the infra crate implement these.

use async_trait::async_trait;
use creatorhub_domain::{LiveStream, Result, SiteData, StreamHistory, YoutubeVideo};

/// A platform that reports a follower/subscriber count.
#[async_trait]
pub trait FollowerSource: Send + Sync {
    /// Key written to `followerCounts` (`youtube`, `vk_group`, ...).
    fn platform_id(&self) -> &str;

    async fn follower_count(&self) -> Result<u64>;
}

/// Recent uploads, newest first.
#[async_trait]
pub trait VideoFeed: Send + Sync {
    async fn recent_videos(&self, max_results: u32) -> Result<Vec<YoutubeVideo>>;
}

/// Current live status of one platform.
///
/// Implementations return [`LiveStream::Offline`] when nothing is live.
#[async_trait]
pub trait LiveStatusSource: Send + Sync {
    fn platform_id(&self) -> &str;

    async fn live_status(&self) -> Result<LiveStream>;
}

/// Persistence for `data.json`.
#[async_trait]
pub trait SiteDataStore: Send + Sync {
    /// Previous data; a missing or unreadable document loads as empty.
    async fn load(&self) -> Result<SiteData>;

    async fn save(&self, data: &SiteData) -> Result<()>;
}

/// Persistence for `streams_history.json`.
#[async_trait]
pub trait StreamHistoryStore: Send + Sync {
    /// A missing document loads as empty; one that exists but cannot be
    /// parsed is an error, so it is never replaced by a fresh history.
    async fn load(&self) -> Result<StreamHistory>;

    async fn save(&self, history: &StreamHistory) -> Result<()>;
}
