//! Twitch Helix client
//!
//! Uses an app access token from the client-credentials grant. The token is
//! fetched once per client and reused for every Helix call.

use async_trait::async_trait;
use creatorhub_core::{FollowerSource, LiveStatusSource};
use creatorhub_domain::constants::PLATFORM_TWITCH;
use creatorhub_domain::{HubError, LiveStream, Result, TwitchLive};
use reqwest::Method;
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::TwitchCredentials;
use crate::http::HttpClient;

const TWITCH_AUTH_URL: &str = "https://id.twitch.tv";
const TWITCH_API_URL: &str = "https://api.twitch.tv/helix";

pub struct TwitchClient {
    http_client: HttpClient,
    credentials: TwitchCredentials,
    auth_url: String,
    api_url: String,
    access_token: OnceCell<String>,
    user_id: OnceCell<String>,
}

impl TwitchClient {
    pub fn new(credentials: TwitchCredentials, http_client: HttpClient) -> Self {
        Self {
            http_client,
            credentials,
            auth_url: TWITCH_AUTH_URL.to_string(),
            api_url: TWITCH_API_URL.to_string(),
            access_token: OnceCell::new(),
            user_id: OnceCell::new(),
        }
    }

    /// Point the token endpoint and the Helix API at other roots.
    pub fn with_base_urls(mut self, auth_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self.api_url = api_url.into();
        self
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    async fn access_token(&self) -> Result<&str> {
        let token = self
            .access_token
            .get_or_try_init(|| async {
                let request = self.http_client.request(Method::POST, format!("{}/oauth2/token", self.auth_url)).query(&[
                    ("client_id", self.credentials.client_id.as_str()),
                    ("client_secret", self.credentials.client_secret.expose()),
                    ("grant_type", "client_credentials"),
                ]);
                let response: TokenResponse = self.http_client.send_json(request).await?;
                debug!("Obtained Twitch app access token");
                Ok::<_, HubError>(response.access_token)
            })
            .await?;
        Ok(token.as_str())
    }

    async fn helix<T>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let token = self.access_token().await?;
        let request = self
            .http_client
            .request(Method::GET, format!("{}/{}", self.api_url, endpoint))
            .query(params)
            .header("Client-ID", &self.credentials.client_id)
            .bearer_auth(token);
        self.http_client.send_json(request).await
    }

    /// Numeric user id of the configured login.
    pub async fn user_id(&self) -> Result<&str> {
        let id = self
            .user_id
            .get_or_try_init(|| async {
                let response: DataResponse<UserItem> = self.helix("users", &[("login", self.username())]).await?;
                response.data.into_iter().next().map(|user| user.id).ok_or_else(|| {
                    HubError::NotFound(format!("No Twitch user data found for {}", self.credentials.username))
                })
            })
            .await?;
        Ok(id.as_str())
    }

    pub async fn follower_total(&self) -> Result<u64> {
        let user_id = self.user_id().await?;
        let response: FollowersResponse = self.helix("channels/followers", &[("broadcaster_id", user_id)]).await?;
        Ok(response.total)
    }

    pub async fn current_stream(&self) -> Result<LiveStream> {
        let response: DataResponse<StreamItem> = self.helix("streams", &[("user_login", self.username())]).await?;
        let Some(stream) = response.data.into_iter().next() else {
            return Ok(LiveStream::Offline);
        };
        info!(channel = %self.credentials.username, stream_id = %stream.id, "Twitch channel is live");
        Ok(LiveStream::Twitch(TwitchLive {
            id: stream.id,
            title: stream.title,
            twitch_channel_name: self.credentials.username.clone(),
        }))
    }
}

#[async_trait]
impl FollowerSource for TwitchClient {
    fn platform_id(&self) -> &str {
        PLATFORM_TWITCH
    }

    async fn follower_count(&self) -> Result<u64> {
        self.follower_total().await
    }
}

#[async_trait]
impl LiveStatusSource for TwitchClient {
    fn platform_id(&self) -> &str {
        PLATFORM_TWITCH
    }

    async fn live_status(&self) -> Result<LiveStream> {
        self.current_stream().await
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct DataResponse<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct UserItem {
    id: String,
}

#[derive(Debug, Deserialize)]
struct FollowersResponse {
    total: u64,
}

#[derive(Debug, Deserialize)]
struct StreamItem {
    id: String,
    #[serde(default)]
    title: String,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::Secret;

    fn test_client(server: &MockServer) -> TwitchClient {
        let http_client =
            HttpClient::builder().timeout(Duration::from_secs(5)).max_attempts(1).build().expect("http client");
        let credentials = TwitchCredentials {
            client_id: "cid".to_string(),
            client_secret: Secret::new("csecret"),
            username: "streamer".to_string(),
        };
        TwitchClient::new(credentials, http_client).with_base_urls(server.uri(), format!("{}/helix", server.uri()))
    }

    async fn mount_token(server: &MockServer, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .and(query_param("grant_type", "client_credentials"))
            .and(query_param("client_id", "cid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "app-token" })))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn follower_total_resolves_user_then_followers() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("GET"))
            .and(path("/helix/users"))
            .and(query_param("login", "streamer"))
            .and(header("Client-ID", "cid"))
            .and(header("Authorization", "Bearer app-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [{ "id": "4242" }] })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/helix/channels/followers"))
            .and(query_param("broadcaster_id", "4242"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 812, "data": [] })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert_eq!(client.follower_count().await.unwrap(), 812);
    }

    #[tokio::test]
    async fn token_is_fetched_once() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("GET"))
            .and(path("/helix/streams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert_eq!(client.live_status().await.unwrap(), LiveStream::Offline);
        assert_eq!(client.live_status().await.unwrap(), LiveStream::Offline);
    }

    #[tokio::test]
    async fn live_stream_carries_channel_name() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("GET"))
            .and(path("/helix/streams"))
            .and(query_param("user_login", "streamer"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": [{ "id": "s1", "title": "Building a castle" }] })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let live = client.live_status().await.unwrap();
        let twitch = live.twitch().expect("twitch stream");
        assert_eq!(twitch.id, "s1");
        assert_eq!(twitch.title, "Building a castle");
        assert_eq!(twitch.twitch_channel_name, "streamer");
    }

    #[tokio::test]
    async fn streams_without_data_key_is_offline() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("GET"))
            .and(path("/helix/streams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pagination": {} })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert_eq!(client.live_status().await.unwrap(), LiveStream::Offline);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let server = MockServer::start().await;
        mount_token(&server, 1).await;
        Mock::given(method("GET"))
            .and(path("/helix/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert!(matches!(client.follower_count().await, Err(HubError::NotFound(_))));
    }

    #[tokio::test]
    async fn rejected_credentials_are_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert!(matches!(client.live_status().await, Err(HubError::Auth(_))));
    }
}
