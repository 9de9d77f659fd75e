//! VK API client
//!
//! One client per counted page: the community (`groups.getById`,
//! `members_count`) and the personal page (`users.get`, `followers_count`).
//! VK reports failures as an `error` object inside a 200 response.

use async_trait::async_trait;
use creatorhub_core::FollowerSource;
use creatorhub_domain::constants::{PLATFORM_VK_GROUP, PLATFORM_VK_PERSONAL};
use creatorhub_domain::{HubError, Result};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::config::VkCredentials;
use crate::http::HttpClient;

const VK_API_URL: &str = "https://api.vk.com/method";
const VK_API_VERSION: &str = "5.199";

/// Which VK page is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VkPage {
    Group,
    Personal,
}

impl VkPage {
    fn method(self) -> &'static str {
        match self {
            Self::Group => "groups.getById",
            Self::Personal => "users.get",
        }
    }

    fn id_param(self) -> &'static str {
        match self {
            Self::Group => "group_id",
            Self::Personal => "user_ids",
        }
    }

    fn count_field(self) -> &'static str {
        match self {
            Self::Group => "members_count",
            Self::Personal => "followers_count",
        }
    }

    fn platform_id(self) -> &'static str {
        match self {
            Self::Group => PLATFORM_VK_GROUP,
            Self::Personal => PLATFORM_VK_PERSONAL,
        }
    }
}

pub struct VkClient {
    http_client: HttpClient,
    credentials: VkCredentials,
    page: VkPage,
    api_url: String,
}

impl VkClient {
    pub fn new(page: VkPage, credentials: VkCredentials, http_client: HttpClient) -> Self {
        Self { http_client, credentials, page, api_url: VK_API_URL.to_string() }
    }

    pub fn group(credentials: VkCredentials, http_client: HttpClient) -> Self {
        Self::new(VkPage::Group, credentials, http_client)
    }

    pub fn personal(credentials: VkCredentials, http_client: HttpClient) -> Self {
        Self::new(VkPage::Personal, credentials, http_client)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub async fn count(&self) -> Result<u64> {
        let page = self.page;
        let request = self.http_client.request(Method::GET, format!("{}/{}", self.api_url, page.method())).query(&[
            (page.id_param(), self.credentials.owner_id.as_str()),
            ("fields", page.count_field()),
            ("v", VK_API_VERSION),
            ("access_token", self.credentials.access_token.expose()),
        ]);
        let envelope: VkEnvelope = self.http_client.send_json(request).await?;

        if let Some(error) = envelope.error {
            return Err(HubError::Upstream(format!(
                "VK API error {}: {} ({}={})",
                error.error_code,
                error.error_msg,
                page.id_param(),
                self.credentials.owner_id
            )));
        }

        let first = envelope
            .response
            .as_ref()
            .and_then(first_item)
            .ok_or_else(|| HubError::NotFound(format!("No VK data found for {}", self.credentials.owner_id)))?;

        first.get(page.count_field()).and_then(Value::as_u64).ok_or_else(|| {
            HubError::Upstream(format!(
                "VK data found but '{}' is missing (private page or insufficient token permissions)",
                page.count_field()
            ))
        })
    }
}

#[async_trait]
impl FollowerSource for VkClient {
    fn platform_id(&self) -> &str {
        self.page.platform_id()
    }

    async fn follower_count(&self) -> Result<u64> {
        self.count().await
    }
}

/// First record of a `response`: a plain list, or `{ "groups": [...] }` as
/// newer `groups.getById` versions return.
fn first_item(response: &Value) -> Option<&Value> {
    match response {
        Value::Array(items) => items.first(),
        Value::Object(map) => map.get("groups").and_then(Value::as_array).and_then(|groups| groups.first()),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct VkEnvelope {
    #[serde(default)]
    response: Option<Value>,
    #[serde(default)]
    error: Option<VkError>,
}

#[derive(Debug, Deserialize)]
struct VkError {
    #[serde(default)]
    error_code: i64,
    #[serde(default)]
    error_msg: String,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::Secret;

    fn credentials() -> VkCredentials {
        VkCredentials { owner_id: "777".to_string(), access_token: Secret::new("vk-token") }
    }

    fn http() -> HttpClient {
        HttpClient::builder().timeout(Duration::from_secs(5)).max_attempts(1).build().expect("http client")
    }

    #[tokio::test]
    async fn group_reads_members_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/groups.getById"))
            .and(query_param("group_id", "777"))
            .and(query_param("fields", "members_count"))
            .and(query_param("v", "5.199"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": [{ "id": 777, "members_count": 3100 }] })))
            .mount(&server)
            .await;

        let client = VkClient::group(credentials(), http()).with_base_url(server.uri());
        assert_eq!(client.platform_id(), "vk_group");
        assert_eq!(client.follower_count().await.unwrap(), 3100);
    }

    #[tokio::test]
    async fn personal_reads_followers_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users.get"))
            .and(query_param("user_ids", "777"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": [{ "followers_count": 95 }] })))
            .mount(&server)
            .await;

        let client = VkClient::personal(credentials(), http()).with_base_url(server.uri());
        assert_eq!(client.follower_count().await.unwrap(), 95);
    }

    #[tokio::test]
    async fn group_accepts_wrapped_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": { "groups": [{ "id": 777, "members_count": 12 }], "profiles": [] }
            })))
            .mount(&server)
            .await;

        let client = VkClient::group(credentials(), http()).with_base_url(server.uri());
        assert_eq!(client.follower_count().await.unwrap(), 12);
    }

    #[tokio::test]
    async fn error_payload_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": { "error_code": 5, "error_msg": "User authorization failed" }
            })))
            .mount(&server)
            .await;

        let client = VkClient::group(credentials(), http()).with_base_url(server.uri());
        match client.follower_count().await {
            Err(HubError::Upstream(msg)) => {
                assert!(msg.contains("5"));
                assert!(msg.contains("User authorization failed"));
                assert!(!msg.contains("vk-token"));
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn hidden_count_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": [{ "id": 777 }] })))
            .mount(&server)
            .await;

        let client = VkClient::group(credentials(), http()).with_base_url(server.uri());
        assert!(matches!(client.follower_count().await, Err(HubError::Upstream(msg)) if msg.contains("members_count")));
    }
}
