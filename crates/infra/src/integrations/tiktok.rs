//! TikTok follower counts through TikAPI

use async_trait::async_trait;
use creatorhub_core::FollowerSource;
use creatorhub_domain::constants::PLATFORM_TIKTOK;
use creatorhub_domain::{HubError, Result};
use reqwest::Method;
use serde::Deserialize;

use crate::config::TikTokCredentials;
use crate::http::HttpClient;

const TIKAPI_URL: &str = "https://api.tikapi.io";

pub struct TikTokClient {
    http_client: HttpClient,
    credentials: TikTokCredentials,
    api_url: String,
}

impl TikTokClient {
    pub fn new(credentials: TikTokCredentials, http_client: HttpClient) -> Self {
        Self { http_client, credentials, api_url: TIKAPI_URL.to_string() }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Follower count from the public profile. TikAPI has returned the stats
    /// under both `data` and `user`; either is accepted.
    pub async fn followers(&self) -> Result<u64> {
        let url = format!("{}/profile/user/{}", self.api_url, self.credentials.username);
        let request = self
            .http_client
            .request(Method::GET, url)
            .header("x-api-key", self.credentials.api_key.expose())
            .header("Accept", "application/json");
        let response: ProfileResponse = self.http_client.send_json(request).await?;

        [response.data, response.user]
            .into_iter()
            .flatten()
            .find_map(|profile| profile.stats.and_then(|stats| stats.follower_count))
            .ok_or_else(|| HubError::Upstream("TikAPI response format unexpected: no followerCount".to_string()))
    }
}

#[async_trait]
impl FollowerSource for TikTokClient {
    fn platform_id(&self) -> &str {
        PLATFORM_TIKTOK
    }

    async fn follower_count(&self) -> Result<u64> {
        self.followers().await
    }
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    #[serde(default)]
    data: Option<Profile>,
    #[serde(default)]
    user: Option<Profile>,
}

#[derive(Debug, Deserialize)]
struct Profile {
    #[serde(default)]
    stats: Option<Stats>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Stats {
    #[serde(default)]
    follower_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::Secret;

    fn test_client(server: &MockServer) -> TikTokClient {
        let http_client =
            HttpClient::builder().timeout(Duration::from_secs(5)).max_attempts(1).build().expect("http client");
        let credentials = TikTokCredentials { username: "dancer".to_string(), api_key: Secret::new("tik-key") };
        TikTokClient::new(credentials, http_client).with_base_url(server.uri())
    }

    #[tokio::test]
    async fn reads_data_stats() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/profile/user/dancer"))
            .and(header("x-api-key", "tik-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "stats": { "followerCount": 91000 } } })))
            .mount(&server)
            .await;

        assert_eq!(test_client(&server).follower_count().await.unwrap(), 91_000);
    }

    #[tokio::test]
    async fn falls_back_to_user_stats() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "secUid": "x" },
                "user": { "stats": { "followerCount": 77 } }
            })))
            .mount(&server)
            .await;

        assert_eq!(test_client(&server).follower_count().await.unwrap(), 77);
    }

    #[tokio::test]
    async fn unexpected_shape_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
            .mount(&server)
            .await;

        assert!(matches!(test_client(&server).follower_count().await, Err(HubError::Upstream(_))));
    }
}
