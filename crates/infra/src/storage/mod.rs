//! File-backed stores for the site's JSON documents

pub mod json_store;

pub use json_store::{JsonDocument, JsonHistoryStore, JsonSiteDataStore};
