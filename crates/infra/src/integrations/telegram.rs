//! Telegram Bot API client for channel member counts

use async_trait::async_trait;
use creatorhub_core::FollowerSource;
use creatorhub_domain::constants::PLATFORM_TELEGRAM;
use creatorhub_domain::{HubError, Result};
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use crate::config::TelegramCredentials;
use crate::errors::conversions::status_error;
use crate::errors::InfraError;
use crate::http::HttpClient;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

pub struct TelegramClient {
    http_client: HttpClient,
    credentials: TelegramCredentials,
    api_url: String,
}

impl TelegramClient {
    pub fn new(credentials: TelegramCredentials, http_client: HttpClient) -> Self {
        Self { http_client, credentials, api_url: TELEGRAM_API_URL.to_string() }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Member count of the channel. The bot must be a channel admin.
    ///
    /// The Bot API answers errors with `ok: false` and a description, often
    /// with a 4xx status, so the body is read before the status is judged.
    pub async fn member_count(&self) -> Result<u64> {
        let url = format!("{}/bot{}/getChatMembersCount", self.api_url, self.credentials.bot_token.expose());
        let request =
            self.http_client.request(Method::GET, url).query(&[("chat_id", self.credentials.chat_id.as_str())]);

        let response = self.http_client.send(request).await?;
        let status = response.status();
        let body = response.bytes().await.map_err(|err| HubError::from(InfraError::from(err)))?;

        let envelope: BotResponse = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(status_error(status)),
            Err(err) => return Err(InfraError::from(err).into()),
        };

        match envelope {
            BotResponse { ok: true, result: Some(count), .. } => {
                debug!(chat = %self.credentials.chat_id, count, "Fetched Telegram member count");
                Ok(count)
            }
            BotResponse { description, .. } => Err(HubError::Upstream(format!(
                "Telegram API error: {}",
                description.unwrap_or_else(|| "Unknown error".to_string())
            ))),
        }
    }
}

#[async_trait]
impl FollowerSource for TelegramClient {
    fn platform_id(&self) -> &str {
        PLATFORM_TELEGRAM
    }

    async fn follower_count(&self) -> Result<u64> {
        self.member_count().await
    }
}

#[derive(Debug, Deserialize)]
struct BotResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    result: Option<u64>,
    #[serde(default)]
    description: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::Secret;

    fn test_client(server: &MockServer) -> TelegramClient {
        let http_client =
            HttpClient::builder().timeout(Duration::from_secs(5)).max_attempts(1).build().expect("http client");
        let credentials = TelegramCredentials { bot_token: Secret::new("123:ABC"), chat_id: "@mychannel".to_string() };
        TelegramClient::new(credentials, http_client).with_base_url(server.uri())
    }

    #[tokio::test]
    async fn reads_member_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bot123:ABC/getChatMembersCount"))
            .and(query_param("chat_id", "@mychannel"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": 2048 })))
            .mount(&server)
            .await;

        assert_eq!(test_client(&server).follower_count().await.unwrap(), 2048);
    }

    #[tokio::test]
    async fn error_description_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({ "ok": false, "description": "Bad Request: chat not found" })),
            )
            .mount(&server)
            .await;

        match test_client(&server).follower_count().await {
            Err(HubError::Upstream(msg)) => assert!(msg.contains("chat not found")),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_json_error_falls_back_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(401).set_body_string("nope")).mount(&server).await;

        assert!(matches!(test_client(&server).follower_count().await, Err(HubError::Auth(_))));
    }
}
