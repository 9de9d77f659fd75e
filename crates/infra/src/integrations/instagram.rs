//! Instagram Graph API client (business accounts)

use async_trait::async_trait;
use creatorhub_core::FollowerSource;
use creatorhub_domain::constants::PLATFORM_INSTAGRAM;
use creatorhub_domain::{HubError, Result};
use reqwest::Method;
use serde::Deserialize;

use crate::config::InstagramCredentials;
use crate::http::HttpClient;

const GRAPH_API_URL: &str = "https://graph.facebook.com/v19.0";

pub struct InstagramClient {
    http_client: HttpClient,
    credentials: InstagramCredentials,
    api_url: String,
}

impl InstagramClient {
    pub fn new(credentials: InstagramCredentials, http_client: HttpClient) -> Self {
        Self { http_client, credentials, api_url: GRAPH_API_URL.to_string() }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Latest `followers_count` value from the daily insights series.
    pub async fn followers(&self) -> Result<u64> {
        let url = format!("{}/{}/insights", self.api_url, self.credentials.business_account_id);
        let request = self.http_client.request(Method::GET, url).query(&[
            ("metric", "followers_count"),
            ("period", "day"),
            ("access_token", self.credentials.access_token.expose()),
        ]);
        let response: InsightsResponse = self.http_client.send_json(request).await?;

        response
            .data
            .into_iter()
            .next()
            .and_then(|metric| metric.values.into_iter().next())
            .map(|point| point.value)
            .ok_or_else(|| {
                HubError::NotFound("No Instagram follower data found or API response format unexpected".to_string())
            })
    }
}

#[async_trait]
impl FollowerSource for InstagramClient {
    fn platform_id(&self) -> &str {
        PLATFORM_INSTAGRAM
    }

    async fn follower_count(&self) -> Result<u64> {
        self.followers().await
    }
}

#[derive(Debug, Deserialize)]
struct InsightsResponse {
    #[serde(default)]
    data: Vec<InsightMetric>,
}

#[derive(Debug, Deserialize)]
struct InsightMetric {
    #[serde(default)]
    values: Vec<InsightValue>,
}

#[derive(Debug, Deserialize)]
struct InsightValue {
    value: u64,
}
