//! Data update service - merges fresh platform data into `data.json`

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use creatorhub_domain::constants::RECENT_VIDEOS_LIMIT;
use creatorhub_domain::{LiveStream, Platform, Result, SiteData, StreamEvent, StreamHistory};
use tracing::{debug, info, warn};

use super::ports::{FollowerSource, LiveStatusSource, SiteDataStore, StreamHistoryStore, VideoFeed};
use crate::live::twitch_channel_url;

const HISTORY_ERROR_KEY: &str = "stream_history_error";

/// Outcome of one update run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Platforms whose count was refreshed.
    pub updated: Vec<String>,
    /// Keys written to `debugInfo` for failed fetches.
    pub errors: Vec<String>,
    pub videos_refreshed: bool,
    pub live: bool,
    /// Stream events appended to the history.
    pub recorded_events: usize,
}

impl UpdateReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Refreshes follower counts, uploads and live status.
///
/// A failing platform never fails the run: its previous value is kept and
/// the error is recorded under `debugInfo`. A stream history that cannot be
/// loaded is reported the same way and never written over. Other store
/// errors propagate.
pub struct DataUpdateService {
    data_store: Arc<dyn SiteDataStore>,
    history_store: Arc<dyn StreamHistoryStore>,
    followers: Vec<Arc<dyn FollowerSource>>,
    videos: Option<Arc<dyn VideoFeed>>,
    youtube_live: Option<Arc<dyn LiveStatusSource>>,
    twitch_live: Option<Arc<dyn LiveStatusSource>>,
    setup_warnings: Vec<(String, String)>,
    max_videos: u32,
}

impl DataUpdateService {
    pub fn new(data_store: Arc<dyn SiteDataStore>, history_store: Arc<dyn StreamHistoryStore>) -> Self {
        Self {
            data_store,
            history_store,
            followers: Vec::new(),
            videos: None,
            youtube_live: None,
            twitch_live: None,
            setup_warnings: Vec::new(),
            max_videos: RECENT_VIDEOS_LIMIT,
        }
    }

    pub fn with_follower_source(mut self, source: Arc<dyn FollowerSource>) -> Self {
        self.followers.push(source);
        self
    }

    pub fn with_video_feed(mut self, feed: Arc<dyn VideoFeed>) -> Self {
        self.videos = Some(feed);
        self
    }

    pub fn with_youtube_live(mut self, source: Arc<dyn LiveStatusSource>) -> Self {
        self.youtube_live = Some(source);
        self
    }

    pub fn with_twitch_live(mut self, source: Arc<dyn LiveStatusSource>) -> Self {
        self.twitch_live = Some(source);
        self
    }

    /// Record that a platform was skipped because it is not configured.
    pub fn with_setup_warning(mut self, platform_id: impl Into<String>, message: impl Into<String>) -> Self {
        self.setup_warnings.push((platform_id.into(), message.into()));
        self
    }

    pub fn with_max_videos(mut self, max_videos: u32) -> Self {
        self.max_videos = max_videos;
        self
    }

    /// Run one update, stamping the result with `now`.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<UpdateReport> {
        let mut data = self.data_store.load().await?;
        data.debug_info.clear();
        let mut report = UpdateReport::default();

        for (platform, message) in &self.setup_warnings {
            warn!(platform = %platform, "{message}");
            data.debug_info.insert(format!("{platform}_setup_warning"), message.clone());
        }

        self.refresh_followers(&mut data, &mut report).await;
        self.refresh_videos(&mut data, &mut report).await;

        let youtube = self.fetch_live(self.youtube_live.as_ref(), &mut data, &mut report).await;
        let twitch = self.fetch_live(self.twitch_live.as_ref(), &mut data, &mut report).await;
        data.live_stream = merge_live_status(youtube, twitch);
        report.live = data.live_stream.is_live();

        if report.live {
            let today = now.with_timezone(&Local).date_naive();
            match self.history_store.load().await {
                Ok(mut history) => {
                    report.recorded_events = record_live_streams(&mut history, &data.live_stream, today);
                    if report.recorded_events > 0 {
                        self.history_store.save(&history).await?;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "Stream history unreadable, not recording this stream");
                    data.debug_info.insert(HISTORY_ERROR_KEY.to_string(), err.to_string());
                    report.errors.push(HISTORY_ERROR_KEY.to_string());
                }
            }
        }

        data.last_updated = Some(now);
        self.data_store.save(&data).await?;

        info!(
            updated = report.updated.len(),
            errors = report.errors.len(),
            live = report.live,
            recorded_events = report.recorded_events,
            "Site data updated"
        );
        Ok(report)
    }

    async fn refresh_followers(&self, data: &mut SiteData, report: &mut UpdateReport) {
        for source in &self.followers {
            let platform = source.platform_id();
            match source.follower_count().await {
                Ok(count) => {
                    debug!(platform = %platform, count, "Fetched follower count");
                    data.follower_counts.insert(platform.to_string(), count);
                    report.updated.push(platform.to_string());
                }
                Err(err) => {
                    warn!(platform = %platform, error = %err, "Follower count not fetched, keeping previous value");
                    let key = format!("{platform}_error");
                    data.debug_info.insert(key.clone(), err.to_string());
                    report.errors.push(key);
                }
            }
        }
    }

    async fn refresh_videos(&self, data: &mut SiteData, report: &mut UpdateReport) {
        let Some(feed) = &self.videos else {
            return;
        };
        match feed.recent_videos(self.max_videos).await {
            Ok(videos) => {
                debug!(count = videos.len(), "Fetched recent videos");
                data.youtube_videos = videos;
                report.videos_refreshed = true;
            }
            Err(err) => {
                warn!(error = %err, "Recent videos not fetched, keeping previous list");
                let key = "youtube_videos_error".to_string();
                data.debug_info.insert(key.clone(), err.to_string());
                report.errors.push(key);
            }
        }
    }

    async fn fetch_live(
        &self,
        source: Option<&Arc<dyn LiveStatusSource>>,
        data: &mut SiteData,
        report: &mut UpdateReport,
    ) -> LiveStream {
        let Some(source) = source else {
            return LiveStream::Offline;
        };
        let platform = source.platform_id();
        match source.live_status().await {
            Ok(live) => {
                debug!(platform = %platform, live = live.is_live(), "Fetched live status");
                live
            }
            Err(err) => {
                warn!(platform = %platform, error = %err, "Live status not fetched, treating as offline");
                let key = format!("{platform}_live_error");
                data.debug_info.insert(key.clone(), err.to_string());
                report.errors.push(key);
                LiveStream::Offline
            }
        }
    }
}

/// Combine the per-platform statuses.
///
/// YouTube is primary; a concurrent Twitch stream is attached to it. Twitch
/// alone becomes primary.
pub fn merge_live_status(youtube: LiveStream, twitch: LiveStream) -> LiveStream {
    match youtube {
        LiveStream::Youtube { id, title, youtube_channel_id, .. } => LiveStream::Youtube {
            id,
            title,
            youtube_channel_id,
            twitch_live: twitch.twitch().cloned(),
        },
        _ => match twitch.twitch() {
            Some(tw) => LiveStream::Twitch(tw.clone()),
            None => LiveStream::Offline,
        },
    }
}

/// Append today's event for every live platform not yet recorded today.
/// Returns how many events were added.
fn record_live_streams(history: &mut StreamHistory, live: &LiveStream, today: NaiveDate) -> usize {
    let date = today.format("%Y-%m-%d").to_string();
    let mut candidates = Vec::new();
    if let Some(id) = live.youtube_video_id() {
        candidates.push(StreamEvent::new(&date, Platform::Youtube, format!("https://www.youtube.com/watch?v={id}")));
    }
    if let Some(tw) = live.twitch().filter(|tw| !tw.twitch_channel_name.is_empty()) {
        candidates.push(StreamEvent::new(&date, Platform::Twitch, twitch_channel_url(&tw.twitch_channel_name)));
    }

    let mut added = 0;
    for event in candidates {
        if !history.contains(&event.date, event.platform) {
            info!(date = %event.date, platform = %event.platform, "Recording live stream");
            history.events.push(event);
            added += 1;
        }
    }
    added
}
