//! # creatorhub Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The stream calendar (month grid, history grouping, markers)
//! - Application state transitions, translations, link and swipe rules
//! - The data update service and the port traits it depends on
//!
//! ## Architecture Principles
//! - Only depends on `creatorhub-domain`
//! - No filesystem, HTTP, or platform code
//! - All external dependencies via traits

pub mod calendar;
pub mod i18n;
pub mod links;
pub mod live;
pub mod skin;
pub mod state;
pub mod swipe;
pub mod update;

pub use calendar::{
    annotate_month, build_month_grid, build_month_grid_now, classify_cell, group_events_by_date,
    months_between, CalendarCell, MonthStep, MonthView, StreamSchedule,
};
pub use i18n::Translations;
pub use links::{link_follower_count, linked_follower_total, total_followers, visible_links};
pub use live::{live_embed, parse_mock_live, LiveEmbed};
pub use skin::SkinAnimation;
pub use state::AppState;
pub use swipe::{swipe_target, SwipeDirection, SwipeFeedback, SwipeTracker};
pub use update::{
    DataUpdateService, FollowerSource, LiveStatusSource, SiteDataStore, StreamHistoryStore,
    UpdateReport, VideoFeed,
};
