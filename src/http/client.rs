//! HTTP client with a minimum-dwell success path
//!
//! Wraps reqwest so that the result of a request is delivered no sooner than
//! a caller-supplied floor, measured from the moment the request was issued.
//! A response that already took longer than the floor comes back immediately.
//! Transport, connection management, and failure reporting stay with reqwest;
//! this client only instruments the success path.

use super::dwell::with_min_dwell;
use crate::error::{Error, Result};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: Option<String>,
    /// Transport timeout, applied by reqwest. Unrelated to the dwell floor.
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("dwell-http/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the transport timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: HashMap<String, String>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<Value>,
    /// Override the transport timeout for this request
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set transport timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP client whose success path honors a minimum dwell time
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Make a GET request, holding the response until `floor` has elapsed
    pub async fn get(&self, floor: Duration, url: &str) -> Result<Response> {
        self.request(Method::GET, floor, url, RequestConfig::default())
            .await
    }

    /// Make a GET request with config
    pub async fn get_with_config(
        &self,
        floor: Duration,
        url: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        self.request(Method::GET, floor, url, config).await
    }

    /// Make a POST request, holding the response until `floor` has elapsed
    pub async fn post(&self, floor: Duration, url: &str, body: Value) -> Result<Response> {
        self.request(Method::POST, floor, url, RequestConfig::default().json(body))
            .await
    }

    /// Make a POST request with config
    pub async fn post_with_config(
        &self,
        floor: Duration,
        url: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        self.request(Method::POST, floor, url, config).await
    }

    /// Make a GET request and parse the JSON response, holding the parsed
    /// value until `floor` has elapsed
    pub async fn get_json<T: DeserializeOwned>(&self, floor: Duration, url: &str) -> Result<T> {
        self.get_json_with_config(floor, url, RequestConfig::default())
            .await
    }

    /// Make a GET request with config and parse the JSON response
    ///
    /// The floor covers issuance through body deserialization, so the caller
    /// observes the parsed value no sooner than `floor` after issuance.
    pub async fn get_json_with_config<T: DeserializeOwned>(
        &self,
        floor: Duration,
        url: &str,
        config: RequestConfig,
    ) -> Result<T> {
        with_min_dwell(floor, || async move {
            let response = self.send(Method::GET, url, config).await?;
            let json: T = response.json().await.map_err(Error::Http)?;
            Ok(json)
        })
        .await
    }

    /// Make a generic request, holding the response until `floor` has elapsed
    ///
    /// The response comes back exactly as reqwest produced it; cancellation
    /// keeps reqwest's native semantics (drop the future to abort).
    pub async fn request(
        &self,
        method: Method,
        floor: Duration,
        url: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        with_min_dwell(floor, || self.send(method, url, config)).await
    }

    /// Issue a request and discard the response, with no dwell applied
    ///
    /// The no-interest path: nothing is held back and nothing beyond the
    /// error channel is surfaced.
    pub async fn fire_and_forget(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<()> {
        self.send(method, url, config).await.map(drop)
    }

    /// Build and send one request through reqwest, mapping non-success
    /// statuses to errors
    async fn send(&self, method: Method, url: &str, config: RequestConfig) -> Result<Response> {
        let full_url = self.build_url(url)?;
        let mut req = self.client.request(method.clone(), full_url.clone());

        // Add default headers
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        // Add request-specific headers
        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        // Add query parameters
        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        // Add body
        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        // Per-request transport timeout override
        if let Some(timeout) = config.timeout {
            req = req.timeout(timeout);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("Request succeeded: {} {}", method, full_url);
        Ok(response)
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                Ok(Url::parse(&format!("{base}/{path}"))?)
            }
            None => Ok(Url::parse(path)?),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
