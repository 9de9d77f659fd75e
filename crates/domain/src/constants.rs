//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Calendar
/// Monday-indexed weekday of the default stream day (Friday).
pub const DEFAULT_STREAM_WEEKDAY_INDEX: u32 = 4;
pub const DAYS_PER_WEEK: u32 = 7;
pub const MONTHS_PER_YEAR: u32 = 12;

// Swipe gestures
/// Fraction of the card width a drag must exceed to count as a swipe.
pub const SWIPE_THRESHOLD_RATIO: f64 = 0.25;
/// Horizontal displacement (px) after which the card shows swipe feedback.
pub const SWIPE_FEEDBACK_PX: f64 = 20.0;

// Data files
pub const DEFAULT_DATA_PATH: &str = "data.json";
pub const DEFAULT_HISTORY_PATH: &str = "streams_history.json";
pub const DEFAULT_OUTPUT_DIR: &str = "dist";
pub const DEFAULT_LINKS_PAGE_URL: &str = "./links/";
pub const DEFAULT_EMBED_PARENT: &str = "localhost";

// Platform identifiers used as `followerCounts` keys
pub const PLATFORM_YOUTUBE: &str = "youtube";
pub const PLATFORM_TWITCH: &str = "twitch";
pub const PLATFORM_TELEGRAM: &str = "telegram";
pub const PLATFORM_INSTAGRAM: &str = "instagram";
pub const PLATFORM_X: &str = "x";
pub const PLATFORM_TIKTOK: &str = "tiktok";
pub const PLATFORM_VK_GROUP: &str = "vk_group";
pub const PLATFORM_VK_PERSONAL: &str = "vk_personal";

/// Every platform the updater knows about, in the order it reports them.
pub const KNOWN_PLATFORMS: [&str; 8] = [
    PLATFORM_YOUTUBE,
    PLATFORM_TELEGRAM,
    PLATFORM_INSTAGRAM,
    PLATFORM_X,
    PLATFORM_TWITCH,
    PLATFORM_TIKTOK,
    PLATFORM_VK_GROUP,
    PLATFORM_VK_PERSONAL,
];

// Updater
pub const RECENT_VIDEOS_LIMIT: u32 = 20;
