//! # creatorhub Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with retry
//! - Platform API clients (YouTube, Twitch, VK, Telegram, Instagram, X, TikTok)
//! - JSON stores for `data.json` and the stream history
//! - Config file and credential loading
//! - The static site renderer
//!
//! ## Architecture
//! - Implements traits defined in `creatorhub-core`
//! - Depends on `creatorhub-domain` and `creatorhub-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod site;
pub mod storage;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::*;
pub use integrations::*;
pub use site::{RenderedPage, SiteRenderer};
pub use storage::*;
