use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, IntoHeaderName};
use serde::de::DeserializeOwned;

/// HTTP verbs supported by [`RequestClient::execute`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// The default verb when the caller does not specify one.
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Per-request options overlaid on top of the client defaults.
///
/// The zero value (see [`Default`]) describes a plain GET request with no
/// extra headers and no payload.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// The HTTP verb to use.
    pub method: HttpMethod,
    /// Caller-supplied headers. On a name collision with the client defaults
    /// the caller's value wins.
    pub headers: HeaderMap,
    /// Optional JSON payload. When absent, no payload is attached and no
    /// payload-length header is implied.
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    /// Sets the HTTP verb for this request.
    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds a header, replacing any previously set value under that name.
    pub fn header(mut self, name: impl IntoHeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attaches a JSON payload to the request.
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Errors that can occur while executing a request against the backend API.
///
/// None of these are recovered here; the caller owns retry and
/// user-messaging policy.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The request produced no response: the endpoint was unreachable, the
    /// connection timed out or was reset, or the request could not be
    /// constructed in the first place.
    #[error("failed to reach the endpoint: {0}")]
    Transport(#[source] reqwest::Error),
    /// A response arrived with a status code outside the 200-299 range. The
    /// response body is not decoded.
    #[error("endpoint responded with status {status}")]
    HttpStatus {
        /// The status code reported by the server.
        status: StatusCode,
    },
    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A thin wrapper over a pooled [`reqwest::Client`] that normalizes request
/// outcomes into a typed success or a [`RequestError`].
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct RequestClient {
    inner: reqwest::Client,
}

impl RequestClient {
    /// Creates a client with its own connection pool.
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Executes a single request and decodes the JSON response body into `T`.
    ///
    /// The effective headers are the client defaults (declaring the JSON
    /// payload format) overlaid with the caller's headers; caller keys win
    /// on collision. A payload, when present, is serialized to its canonical
    /// JSON text.
    ///
    /// Outcomes are classified as follows:
    /// - A status in the 200-299 range decodes the body as `T`.
    /// - Any other status fails with [`RequestError::HttpStatus`] without
    ///   touching the body.
    /// - Failures before a response arrives fail with
    ///   [`RequestError::Transport`].
    /// - A body that does not decode fails with [`RequestError::Decode`].
    ///
    /// Every failure emits one diagnostic log entry before propagating.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<T, RequestError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in options.headers.iter() {
            headers.insert(name, value.clone());
        }

        let mut request = self
            .inner
            .request(options.method.into(), url)
            .headers(headers);
        if let Some(body) = &options.body {
            let payload = serde_json::to_vec(body).expect("a JSON value always serializes");
            request = request.body(payload);
        }

        let response = request.send().await.map_err(|source| {
            log::error!("Request to {url} failed before a response arrived: {source}");
            RequestError::Transport(source)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Request to {url} failed with status {status}");
            return Err(RequestError::HttpStatus { status });
        }

        let payload = response.bytes().await.map_err(|source| {
            log::error!("Request to {url} failed while reading the response body: {source}");
            RequestError::Transport(source)
        })?;
        serde_json::from_slice(&payload).map_err(|source| {
            log::error!("Request to {url} returned a body that does not decode: {source}");
            RequestError::Decode(source)
        })
    }
}
