/*
[INPUT]:  HTTP configuration (base URL, API version, timeouts)
[OUTPUT]: GET/POST helpers returning decoded JSON
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::{Result, SwitcheoError};

/// Switcheo testnet API
pub const DEFAULT_BASE_URL: &str = "https://test-api.switcheo.network/";
pub const DEFAULT_API_VERSION: &str = "/v2";

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Path segment appended to the base URL, e.g. `/v2`
    pub api_version: String,
    #[serde(rename = "timeout_secs", with = "duration_secs")]
    pub timeout: Duration,
    #[serde(rename = "connect_timeout_secs", with = "duration_secs")]
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL without trailing slashes, followed by the API version
    pub fn effective_base_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.api_version
        )
    }
}

/// Body of a POST request
#[derive(Debug, Clone, Copy, Default)]
pub enum PostBody<'a> {
    #[default]
    Empty,
    /// `application/x-www-form-urlencoded` pairs
    Form(&'a [(&'a str, String)]),
    Json(&'a Value),
}

/// Thin JSON-over-HTTP client bound to one effective base URL.
///
/// Every call is a single request: no retries, no auth headers. Non-2xx
/// responses become [`SwitcheoError::Http`], bodies that are not the
/// expected JSON become [`SwitcheoError::Decode`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new client against the testnet with default timeouts
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.effective_base_url();
        Url::parse(&base_url)?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            timeout: config.timeout,
        })
    }

    /// Effective base URL every path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build full URL for an endpoint path
    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        debug!(method = %method, url = %url, params = query.len(), "Sending Switcheo request");

        let builder = self.http_client.request(method, url);
        if query.is_empty() {
            Ok(builder)
        } else {
            Ok(builder.query(query))
        }
    }

    /// GET `path` and return the decoded JSON body
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        self.get_json(path, query).await
    }

    /// GET `path` and decode the body into `T`
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let builder = self.request(Method::GET, path, query)?;
        self.send_json(builder).await
    }

    /// POST `body` to `path` and return the decoded JSON body
    pub async fn post(
        &self,
        path: &str,
        body: PostBody<'_>,
        query: &[(&str, String)],
    ) -> Result<Value> {
        self.post_json(path, body, query).await
    }

    /// POST `body` to `path` and decode the response into `T`
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: PostBody<'_>,
        query: &[(&str, String)],
    ) -> Result<T> {
        let builder = self.request(Method::POST, path, query)?;
        let builder = match body {
            PostBody::Empty => builder,
            PostBody::Form(form) => builder.form(form),
            PostBody::Json(json) => builder.json(json),
        };
        self.send_json(builder).await
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Switcheo request failed");
            return Err(SwitcheoError::Http { status, body });
        }

        debug!(url = %url, status = status.as_u16(), bytes = body.len(), "Switcheo response received");
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(source) => Err(SwitcheoError::Decode { source, body }),
        }
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
