//! X (Twitter) API v2 client

use async_trait::async_trait;
use creatorhub_core::FollowerSource;
use creatorhub_domain::constants::PLATFORM_X;
use creatorhub_domain::{HubError, Result};
use reqwest::Method;
use serde::Deserialize;

use crate::config::XCredentials;
use crate::http::HttpClient;

const X_API_URL: &str = "https://api.twitter.com";

pub struct XClient {
    http_client: HttpClient,
    credentials: XCredentials,
    api_url: String,
}

impl XClient {
    pub fn new(credentials: XCredentials, http_client: HttpClient) -> Self {
        Self { http_client, credentials, api_url: X_API_URL.to_string() }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub async fn followers(&self) -> Result<u64> {
        let url = format!("{}/2/users/{}", self.api_url, self.credentials.user_id);
        let request = self
            .http_client
            .request(Method::GET, url)
            .query(&[("user.fields", "public_metrics")])
            .bearer_auth(self.credentials.bearer_token.expose());
        let response: UserResponse = self.http_client.send_json(request).await?;

        response.data.and_then(|user| user.public_metrics).map(|metrics| metrics.followers_count).ok_or_else(|| {
            HubError::NotFound("No X public_metrics data found or API response format unexpected".to_string())
        })
    }
}

#[async_trait]
impl FollowerSource for XClient {
    fn platform_id(&self) -> &str {
        PLATFORM_X
    }

    async fn follower_count(&self) -> Result<u64> {
        self.followers().await
    }
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    #[serde(default)]
    data: Option<UserData>,
}

#[derive(Debug, Deserialize)]
struct UserData {
    #[serde(default)]
    public_metrics: Option<PublicMetrics>,
}

#[derive(Debug, Deserialize)]
struct PublicMetrics {
    followers_count: u64,
}
