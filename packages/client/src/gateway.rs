// ABOUTME: Request gateway shared by every endpoint function
// ABOUTME: Sends one JSON request, checks the status and decodes the body

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Message used when an error body cannot be read off the connection
const UNKNOWN_ERROR: &str = "Unknown error";

/// Method, body and extra headers for a single gateway call
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    method: Method,
    body: Option<Vec<u8>>,
    headers: HeaderMap,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Serializes `body` as the JSON request payload
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ClientResult<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Adds a header. Caller headers win over the gateway's defaults.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// HTTP client for the Svara API.
///
/// Cheap to clone; holds no mutable state. No retries and no timeout are
/// applied here. Callers wanting a timeout can pass their own
/// `reqwest::Client` through [`ApiClient::with_http_client`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("svara-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_http_client(config, http))
    }

    pub fn with_http_client(config: ClientConfig, http: Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// Issues exactly one request against `url`.
    ///
    /// `Content-Type: application/json` is always sent, overridable by
    /// headers in `options`. Returns `Ok(None)` for 204 without reading the
    /// body. Non-success statuses become [`ClientError::Api`] carrying the
    /// server's `detail`, or `HTTP <status>` when there is none.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> ClientResult<Option<T>> {
        let response = self.send(url, options).await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        response.json::<T>().await.map(Some).map_err(|e| {
            if e.is_decode() {
                ClientError::InvalidResponse(e.to_string())
            } else {
                ClientError::Network(e)
            }
        })
    }

    /// Sends one request and returns the response once its status is a success
    async fn send(&self, url: &str, options: RequestOptions) -> ClientResult<Response> {
        let RequestOptions {
            method,
            body,
            headers: extra,
        } = options;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(extra);

        debug!(%method, url, "sending request");

        let mut request = self.http.request(method.clone(), url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(%method, url, status = status.as_u16(), "received response");

        if !status.is_success() {
            let err = error_from_response(response).await;
            warn!(%method, url, status = status.as_u16(), "request failed: {}", err);
            return Err(err);
        }

        Ok(response)
    }

    /// Gateway call for endpoints that always answer with a record
    pub(crate) async fn fetch_record<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<T> {
        self.fetch_json(&self.url(path), options)
            .await?
            .ok_or(ClientError::EmptyResponse(StatusCode::NO_CONTENT.as_u16()))
    }

    /// Gateway call for endpoints whose answer carries no value (deletes).
    /// Any success body is drained and dropped, never decoded.
    pub(crate) async fn fetch_empty(&self, path: &str, options: RequestOptions) -> ClientResult<()> {
        let response = self.send(&self.url(path), options).await?;
        response.bytes().await?;
        Ok(())
    }
}

async fn error_from_response(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let message = match response.text().await {
        Ok(text) => detail_message(&text).unwrap_or_else(|| format!("HTTP {}", status)),
        Err(_) => UNKNOWN_ERROR.to_string(),
    };
    ClientError::api(status, message)
}

/// Non-empty string `detail` from a JSON error body
fn detail_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}
