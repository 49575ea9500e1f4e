//! HTTP client for the demo backend API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    notify::{Notice, Notifier},
    types::{NewPost, Post},
    Error,
};

/// HTTP methods accepted by [`Client::request`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// Whether the payload travels in the request body. GET and DELETE
    /// payloads become query parameters instead.
    fn takes_body(self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }

    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Per-call configuration. Immutable for the duration of the call.
#[derive(Clone, Debug, Default)]
pub struct RequestConfig {
    /// Maximum wait before the call fails with a timeout error. `None`
    /// uses the client's default (15 seconds unless configured otherwise).
    pub timeout: Option<Duration>,
    /// Header overrides, applied on top of the
    /// `content-type: application/json` default.
    pub headers: Vec<(String, String)>,
    /// Suppresses the failure notification for this call. The returned
    /// value is never affected either way.
    pub silent: bool,
}

impl RequestConfig {
    /// Config with a specific timeout and everything else defaulted.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::default()
        }
    }

    /// Config that never fires the failure notification.
    pub fn silent() -> Self {
        Self {
            silent: true,
            ..Self::default()
        }
    }
}

/// HTTP client for the demo backend.
///
/// The base URL is injected at construction; there is no process-global
/// configuration. Each call is an independent request/response round trip
/// with its own timeout: no retries, no caching, no deduplication.
pub struct Client {
    base_url: String,
    default_timeout: Duration,
    notifier: Option<Arc<dyn Notifier>>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client configured from the process environment
    /// (`PLACEFEED_BASE_URL`), falling back to the public demo endpoint.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::from_env())
    }

    /// Creates a client with an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            base_url: config.base_url,
            default_timeout: config.timeout,
            notifier: None,
        }
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_config(ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    /// Attaches a notifier that failed calls report to, subject to each
    /// call's `silent` flag.
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    fn build_url(&self, path: &str, query: Option<&Value>) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}{}", self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        if let Some(payload) = query {
            match payload {
                Value::Object(map) if !map.is_empty() => {
                    let mut pairs = url.query_pairs_mut();
                    for (key, value) in map {
                        match value {
                            Value::String(s) => {
                                pairs.append_pair(key, s);
                            }
                            other => {
                                pairs.append_pair(key, &other.to_string());
                            }
                        }
                    }
                }
                Value::Object(_) | Value::Null => {}
                other => {
                    // Placement is caller convention, not enforced.
                    tracing::warn!("ignoring non-object query payload: {}", other);
                }
            }
        }
        Ok(url)
    }

    fn build_headers(config: &RequestConfig) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &config.headers {
            let name = match HeaderName::from_bytes(name.as_bytes()) {
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!("skipping invalid header name {:?}: {}", name, e);
                    continue;
                }
            };
            let value = match HeaderValue::from_str(value) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("skipping invalid header value for {}: {}", name, e);
                    continue;
                }
            };
            headers.insert(name, value);
        }
        headers
    }

    /// Sends a request and decodes the response body.
    ///
    /// `path` is appended to the base URL and may carry its own query
    /// string. The payload travels as a JSON body for POST/PUT/PATCH and as
    /// query parameters for GET/DELETE. Every call resolves to exactly one
    /// of the decoded body or a normalized [`Error`]; a failure additionally
    /// fires one notification when a notifier is attached and the call is
    /// not silent.
    pub async fn request<T>(
        &self,
        path: &str,
        method: Method,
        payload: Option<&Value>,
        config: &RequestConfig,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let result = self.dispatch(path, method, payload, config).await;
        if let Err(err) = &result {
            if !config.silent {
                if let Some(notifier) = &self.notifier {
                    notifier.notify(Notice::error(err.to_string()));
                }
            }
        }
        result
    }

    async fn dispatch<T>(
        &self,
        path: &str,
        method: Method,
        payload: Option<&Value>,
        config: &RequestConfig,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let query = if method.takes_body() { None } else { payload };
        let url = self.build_url(path, query)?;

        let timeout = config.timeout.unwrap_or(self.default_timeout);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;

        let mut builder = client
            .request(method.as_reqwest(), url)
            .headers(Self::build_headers(config));
        if method.takes_body() {
            if let Some(body) = payload {
                builder = builder.json(body);
            }
        }

        let resp = builder.send().await.map_err(classify_send_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(classify_send_error)?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("request failed with status {}: {}", status, snippet);
            return Err(Error::Status {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "failed to decode response body: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::Decode(e)
        })
    }

    /// Convenience wrapper for GET requests.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: Option<&Value>,
        config: &RequestConfig,
    ) -> Result<T, Error> {
        self.request(path, Method::Get, payload, config).await
    }

    /// Convenience wrapper for POST requests.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: Option<&Value>,
        config: &RequestConfig,
    ) -> Result<T, Error> {
        self.request(path, Method::Post, payload, config).await
    }

    /// Convenience wrapper for PUT requests.
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: Option<&Value>,
        config: &RequestConfig,
    ) -> Result<T, Error> {
        self.request(path, Method::Put, payload, config).await
    }

    /// Convenience wrapper for DELETE requests.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: Option<&Value>,
        config: &RequestConfig,
    ) -> Result<T, Error> {
        self.request(path, Method::Delete, payload, config).await
    }

    /// Convenience wrapper for PATCH requests.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: Option<&Value>,
        config: &RequestConfig,
    ) -> Result<T, Error> {
        self.request(path, Method::Patch, payload, config).await
    }

    /// Fetches posts from the demo backend, optionally capped to `limit`.
    pub async fn get_posts(&self, limit: Option<i64>) -> Result<Vec<Post>, Error> {
        let payload = limit.map(|n| serde_json::json!({ "_limit": n }));
        self.get("/posts", payload.as_ref(), &RequestConfig::default())
            .await
    }

    /// Fetches a single post by its numeric ID.
    pub async fn get_post(&self, id: i64) -> Result<Post, Error> {
        self.get(
            format!("/posts/{}", id).as_str(),
            None,
            &RequestConfig::default(),
        )
        .await
    }

    /// Creates a post.
    pub async fn create_post(&self, post: &NewPost) -> Result<Post, Error> {
        let payload = serde_json::json!({
            "userId": post.user_id,
            "title": post.title,
            "body": post.body,
        });
        self.post("/posts", Some(&payload), &RequestConfig::default())
            .await
    }
}

fn classify_send_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        tracing::error!("request timed out: {}", e);
        Error::Timeout
    } else {
        tracing::error!("network request failed: {}", e);
        Error::Transport(e)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        // Back off to a char boundary so multibyte text cannot split.
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
