//! Follower-data refresh
//!
//! Pulls counts, recent uploads and live status from the platform ports,
//! merges them into the previous `data.json` and records live streams in the
//! stream history.

pub mod ports;
pub mod service;

pub use ports::{FollowerSource, LiveStatusSource, SiteDataStore, StreamHistoryStore, VideoFeed};
pub use service::{merge_live_status, DataUpdateService, UpdateReport};
