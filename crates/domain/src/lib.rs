//! # creatorhub Domain
//!
//! Domain types and models for creatorhub.
//!
//! This crate contains:
//! - Stream history, calendar and site data types
//! - Site configuration records (links, profile, localized home content)
//! - Domain error types and Result definitions
//! - Domain constants and formatting helpers
//!
//! ## Architecture
//! - No dependencies on other creatorhub crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::format::format_count;
