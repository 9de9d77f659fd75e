//! Shared HTTP client for the platform APIs
//!
//! One `reqwest` client is shared by every platform client. Requests are
//! retried on transport failures, 5xx answers and 429 rate limits; anything
//! else is returned to the caller as-is.

use std::time::Duration;

use creatorhub_domain::HubError;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::conversions::status_error;
use crate::errors::InfraError;

const DEFAULT_USER_AGENT: &str = concat!("creatorhub/", env!("CARGO_PKG_VERSION"));

/// How many times to try a request and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, the first one included. Never zero.
    pub attempts: usize,
    pub base_backoff: Duration,
    /// Upper bound for any single wait, including server-requested ones.
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { attempts: 3, base_backoff: Duration::from_millis(250), max_backoff: Duration::from_secs(10) }
    }
}

impl RetryPolicy {
    /// Exponential delay before retry number `retry` (1-based).
    fn delay(&self, retry: usize) -> Duration {
        let doublings = retry.saturating_sub(1).min(16) as u32;
        self.base_backoff.saturating_mul(1 << doublings).min(self.max_backoff)
    }

    /// Delay before retrying a response, or `None` when it is final.
    fn retry_after_response(&self, response: &Response, retry: usize) -> Option<Duration> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let requested = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok())
                .map(Duration::from_secs);
            return Some(requested.map_or_else(|| self.delay(retry), |d| d.min(self.max_backoff)));
        }
        status.is_server_error().then(|| self.delay(retry))
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}

/// Scheme and host only. API keys and bot tokens travel in query strings
/// and paths.
fn log_target(url: &reqwest::Url) -> String {
    format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default())
}

fn hub_error<E>(err: E) -> HubError
where
    InfraError: From<E>,
{
    InfraError::from(err).into()
}

/// Retrying HTTP client; cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    retry: RetryPolicy,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client with default timeout, user agent and retry policy.
    pub fn new() -> Result<Self, HubError> {
        Self::builder().build()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send `builder`, retrying transient failures.
    ///
    /// The final response is returned whatever its status; use
    /// [`HttpClient::send_json`] to treat non-2xx as errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, HubError> {
        let mut retry = 0;
        loop {
            let request = builder
                .try_clone()
                .ok_or_else(|| HubError::Internal("streaming request bodies cannot be retried".into()))?
                .build()
                .map_err(hub_error)?;
            let method = request.method().clone();
            let target = log_target(request.url());
            let attempt = retry + 1;
            let last_attempt = attempt >= self.retry.attempts;

            match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt, %method, %target, %status, "HTTP response");
                    match self.retry.retry_after_response(&response, attempt) {
                        Some(delay) if !last_attempt => {
                            warn!(attempt, %target, %status, delay_ms = delay.as_millis() as u64, "Retrying HTTP request");
                            tokio::time::sleep(delay).await;
                        }
                        _ => return Ok(response),
                    }
                }
                Err(err) if is_transient(&err) && !last_attempt => {
                    let delay = self.retry.delay(attempt);
                    warn!(attempt, %target, error = %err, delay_ms = delay.as_millis() as u64, "Retrying HTTP request");
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    debug!(attempt, %method, %target, error = %err, "HTTP request failed");
                    return Err(hub_error(err));
                }
            }
            retry += 1;
        }
    }

    /// Send with retries, map non-2xx statuses to errors and decode the JSON
    /// body.
    pub async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T, HubError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(builder).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }
        let body = response.bytes().await.map_err(hub_error)?;
        serde_json::from_slice(&body).map_err(hub_error)
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: String,
    retry: RetryPolicy,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

impl HttpClientBuilder {
    /// Per-request timeout, connection included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total attempts including the first; `0` is treated as `1`.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.retry.attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.retry.base_backoff = backoff;
        self
    }

    pub fn max_backoff(mut self, backoff: Duration) -> Self {
        self.retry.max_backoff = backoff;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn build(self) -> Result<HttpClient, HubError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .no_proxy()
            .build()
            .map_err(hub_error)?;
        Ok(HttpClient { client, retry: self.retry })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use serde::Deserialize;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn fast_client(attempts: usize) -> HttpClient {
        HttpClient::builder()
            .base_backoff(Duration::from_millis(5))
            .max_backoff(Duration::from_millis(20))
            .max_attempts(attempts)
            .build()
            .expect("http client")
    }

    #[derive(Debug, Deserialize)]
    struct Stats {
        followers: u64,
    }

    #[tokio::test]
    async fn recovers_from_a_flaky_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"followers": 42})))
            .mount(&server)
            .await;

        let client = fast_client(3);
        let stats: Stats =
            client.send_json(client.request(Method::GET, format!("{}/stats", server.uri()))).await.unwrap();

        assert_eq!(stats.followers, 42);
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn honours_rate_limits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(204)).mount(&server).await;

        let client = fast_client(2);
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn gives_up_after_the_last_attempt() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(502)).expect(2).mount(&server).await;

        let client = fast_client(2);
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn client_errors_are_final() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(403)).expect(1).mount(&server).await;

        let client = fast_client(3);
        let result: Result<Stats, HubError> = client.send_json(client.request(Method::GET, server.uri())).await;
        assert!(matches!(result, Err(HubError::Auth(_))));
    }

    #[tokio::test]
    async fn refused_connections_become_network_errors() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = fast_client(2);
        let result = client.send(client.request(Method::GET, &url)).await;
        assert!(matches!(result, Err(HubError::Network(_))), "got {result:?}");
    }

    #[tokio::test]
    async fn html_error_pages_are_parse_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let client = fast_client(1);
        let result: Result<Stats, HubError> = client.send_json(client.request(Method::GET, server.uri())).await;
        assert!(matches!(result, Err(HubError::Parse(_))));
    }

    #[test]
    fn backoff_doubles_up_to_the_cap() {
        let policy = RetryPolicy {
            attempts: 5,
            base_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_millis(350),
        };
        assert_eq!(policy.delay(1), Duration::from_millis(100));
        assert_eq!(policy.delay(2), Duration::from_millis(200));
        assert_eq!(policy.delay(3), Duration::from_millis(350));
    }

    #[test]
    fn log_target_hides_tokens() {
        let url = reqwest::Url::parse("https://api.telegram.org/bot123:SECRET/getChatMembersCount?chat_id=1").unwrap();
        assert_eq!(log_target(&url), "https://api.telegram.org");
    }
}
