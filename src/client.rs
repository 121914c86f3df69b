//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use url::Url;

use crate::api::{ChatApi, CollectionsApi, DataApi, DatasetsApi};
use crate::error::{Error, Result};

/// Base URL of the hosted FastGPT service.
const DEFAULT_BASE_URL: &str = "https://api.fastgpt.in";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for streaming requests.
const DEFAULT_STREAM_TIMEOUT: Duration = Duration::from_secs(300);

/// FastGPT API client.
///
/// One client owns one pooled HTTP connection and is cheap to clone;
/// clones share the pool and are safe to use concurrently.
///
/// # Example
///
/// ```no_run
/// use fastgpt_client::FastGptClient;
///
/// # async fn example() -> fastgpt_client::Result<()> {
/// let client = FastGptClient::builder()
///     .api_key("dataset-key")
///     .chat_api_key("app-key")
///     .build()?;
///
/// let datasets = client.datasets().list(None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FastGptClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Bearer token for dataset, collection, and record operations.
    pub(crate) api_key: String,
    /// Bearer token for the chat-completions endpoint.
    pub(crate) chat_api_key: String,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// Streaming timeout.
    pub(crate) stream_timeout: Duration,
}

impl FastGptClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the chat API.
    pub fn chat(&self) -> ChatApi {
        ChatApi::new(self.clone())
    }

    /// Access the datasets API.
    pub fn datasets(&self) -> DatasetsApi {
        DatasetsApi::new(self.clone())
    }

    /// Access the collections API.
    pub fn collections(&self) -> CollectionsApi {
        CollectionsApi::new(self.clone())
    }

    /// Access the data records API.
    pub fn data(&self) -> DataApi {
        DataApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.log_params("GET", path, query);
        let response = self
            .inner
            .http
            .get(url)
            .query(query)
            .bearer_auth(&self.inner.api_key)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        self.post_with_key(path, body, &self.inner.api_key).await
    }

    /// Make a POST request authenticated with the chat key.
    pub(crate) async fn post_chat<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        self.post_with_key(path, body, &self.inner.chat_api_key)
            .await
    }

    async fn post_with_key<T, B>(&self, path: &str, body: &B, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.log_params("POST", path, body);
        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .bearer_auth(key)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request for streaming, authenticated with the chat key.
    ///
    /// Returns the response directly once headers have arrived.
    pub(crate) async fn post_chat_stream<B>(&self, path: &str, body: &B) -> Result<reqwest::Response>
    where
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.log_params("POST", path, body);
        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .bearer_auth(&self.inner.chat_api_key)
            .timeout(self.inner.stream_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(status = %status, body = %text, "response");
            return Err(Error::status(status.as_u16(), text));
        }

        Ok(response)
    }

    /// Make a PUT request.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.log_params("PUT", path, body);
        let response = self
            .inner
            .http
            .put(url)
            .json(body)
            .bearer_auth(&self.inner.api_key)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request with query parameters.
    pub(crate) async fn delete_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.log_params("DELETE", path, query);
        let response = self
            .inner
            .http
            .delete(url)
            .query(query)
            .bearer_auth(&self.inner.api_key)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Handle a response: read the full body, then parse or report.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = %status, body = %body, "response");

        if !status.is_success() {
            return Err(Error::status(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(Error::from)
    }

    /// Log request parameters at debug level (diagnostic only).
    fn log_params<P: serde::Serialize + ?Sized>(&self, method: &str, path: &str, params: &P) {
        if tracing::enabled!(tracing::Level::DEBUG) {
            let params = serde_json::to_string(params).unwrap_or_default();
            tracing::debug!(method, path, params = %params, "request");
        }
    }
}

/// Builder for creating a [`FastGptClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    chat_api_key: Option<String>,
    timeout: Duration,
    stream_timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            chat_api_key: None,
            timeout: DEFAULT_TIMEOUT,
            stream_timeout: DEFAULT_STREAM_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL (defaults to the hosted FastGPT service).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer token for dataset, collection, and record
    /// operations. Required.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the bearer token for the chat-completions endpoint.
    /// Defaults to the general API key.
    pub fn chat_api_key(mut self, key: impl Into<String>) -> Self {
        self.chat_api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the streaming request timeout.
    pub fn stream_timeout(mut self, timeout: Duration) -> Self {
        self.stream_timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<FastGptClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::new("api_key is required"))?;
        let chat_api_key = self.chat_api_key.unwrap_or_else(|| api_key.clone());

        // Parse and normalize base URL
        let mut base_url = Url::parse(&self.base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Build HTTP client
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("fastgpt-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(FastGptClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                api_key,
                chat_api_key,
                timeout: self.timeout,
                stream_timeout: self.stream_timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
