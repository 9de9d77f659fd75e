//! Platform API integrations
//!
//! Each client wraps the shared [`HttpClient`](crate::http::HttpClient) and
//! implements the core update ports for its platform:
//!
//! | Client | Ports |
//! |--------|-------|
//! | [`YouTubeClient`] | `FollowerSource`, `VideoFeed`, `LiveStatusSource` |
//! | [`TwitchClient`] | `FollowerSource`, `LiveStatusSource` |
//! | [`VkClient`] | `FollowerSource` (group or personal page) |
//! | [`TelegramClient`], [`InstagramClient`], [`XClient`], [`TikTokClient`] | `FollowerSource` |
//!
//! # Error Handling
//!
//! - **Network errors and 5xx**: retried by `HttpClient`
//! - **401/403**: `HubError::Auth`
//! - **Error payloads in a 200 body** (VK, Telegram): `HubError::Upstream`
//! - **Well-formed but empty answers**: `HubError::NotFound`

pub mod instagram;
pub mod telegram;
pub mod tiktok;
pub mod twitch;
pub mod vk;
pub mod x;
pub mod youtube;

pub use instagram::InstagramClient;
pub use telegram::TelegramClient;
pub use tiktok::TikTokClient;
pub use twitch::TwitchClient;
pub use vk::{VkClient, VkPage};
pub use x::XClient;
pub use youtube::YouTubeClient;
