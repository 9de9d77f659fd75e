use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use creatorhub_core::update::ports::{FollowerSource, LiveStatusSource, VideoFeed};
use creatorhub_domain::{HubError, LiveStream, Result as DomainResult, YoutubeVideo};

/// Follower source returning a fixed count or a fixed error.
pub struct StubFollowerSource {
    platform: String,
    outcome: DomainResult<u64>,
    calls: AtomicUsize,
}

impl StubFollowerSource {
    pub fn ok(platform: &str, count: u64) -> Self {
        Self { platform: platform.to_string(), outcome: Ok(count), calls: AtomicUsize::new(0) }
    }

    pub fn failing(platform: &str, message: &str) -> Self {
        Self {
            platform: platform.to_string(),
            outcome: Err(HubError::Network(message.to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FollowerSource for StubFollowerSource {
    fn platform_id(&self) -> &str {
        &self.platform
    }

    async fn follower_count(&self) -> DomainResult<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Video feed returning a fixed list or an error.
pub struct StubVideoFeed {
    outcome: DomainResult<Vec<YoutubeVideo>>,
}

impl StubVideoFeed {
    pub fn ok(ids: &[&str]) -> Self {
        let videos = ids
            .iter()
            .map(|id| YoutubeVideo { id: (*id).to_string(), title: format!("Video {id}"), thumbnail_url: None })
            .collect();
        Self { outcome: Ok(videos) }
    }

    pub fn failing() -> Self {
        Self { outcome: Err(HubError::Auth("quota exceeded".to_string())) }
    }
}

#[async_trait]
impl VideoFeed for StubVideoFeed {
    async fn recent_videos(&self, max_results: u32) -> DomainResult<Vec<YoutubeVideo>> {
        self.outcome.clone().map(|mut videos| {
            videos.truncate(max_results as usize);
            videos
        })
    }
}

/// Live status source with a fixed answer.
pub struct StubLiveSource {
    platform: String,
    outcome: DomainResult<LiveStream>,
}

impl StubLiveSource {
    pub fn new(platform: &str, live: LiveStream) -> Self {
        Self { platform: platform.to_string(), outcome: Ok(live) }
    }

    pub fn failing(platform: &str) -> Self {
        Self { platform: platform.to_string(), outcome: Err(HubError::Network("timeout".to_string())) }
    }
}

#[async_trait]
impl LiveStatusSource for StubLiveSource {
    fn platform_id(&self) -> &str {
        &self.platform
    }

    async fn live_status(&self) -> DomainResult<LiveStream> {
        self.outcome.clone()
    }
}
