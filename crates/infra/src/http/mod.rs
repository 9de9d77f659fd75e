//! HTTP client with retry support

pub mod client;

pub use client::{HttpClient, HttpClientBuilder, RetryPolicy};
