//! Shared test helpers for `creatorhub-core` integration tests.
//!
//! In-memory mocks of the update ports so service tests can focus on merge
//! behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod sources;
pub mod stores;
