//! Domain types and models

pub mod calendar;
pub mod locale;
pub mod site_data;
pub mod stream;

pub use calendar::{CalendarViewState, DateEventSummary, DayCell, Marker};
pub use locale::{Locale, Theme};
pub use site_data::{FollowerCounts, SiteData, YoutubeVideo};
pub use stream::{LiveStream, Platform, StreamEvent, StreamHistory, TwitchLive};
