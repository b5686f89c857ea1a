//! HTTP transport for upstream calls.
//!
//! [`HttpTransport`] is the seam between the provider and the network: it
//! issues one GET and hands back status, headers and body without judging
//! the status. [`ReqwestTransport`] is the production implementation.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::errors::MarketDataError;

/// Connect timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Time allowed for the whole response.
pub const RESPONSE_TIMEOUT: Duration = Duration::from_secs(10);

/// Largest response body kept in memory (2 MiB).
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub const DEFAULT_USER_AGENT: &str = "AppClient/1.0";

/// A raw upstream response.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Body as text, lossily decoded; used for error diagnostics.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Issues a GET against a fully formed URL.
///
/// Implementations return `Err` only for transport-level failures (or an
/// oversized body); HTTP error statuses come back as a [`RawResponse`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<RawResponse, MarketDataError>;
}

/// Transport configuration, fixed at startup.
///
/// There is no read/write idle timeout; only connect and whole-response
/// timeouts apply.
#[derive(Clone, Debug)]
pub struct TransportSettings {
    pub connect_timeout: Duration,
    pub response_timeout: Duration,
    pub max_body_bytes: usize,
    pub content_type: &'static str,
    pub user_agent: &'static str,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            connect_timeout: CONNECT_TIMEOUT,
            response_timeout: RESPONSE_TIMEOUT,
            max_body_bytes: MAX_BODY_BYTES,
            content_type: "application/json",
            user_agent: DEFAULT_USER_AGENT,
        }
    }
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
    max_body_bytes: usize,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Result<Self, MarketDataError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(settings.content_type),
        );

        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.response_timeout)
            .user_agent(settings.user_agent)
            .default_headers(default_headers)
            .build()?;

        info!(
            "HTTP transport created: connect {:?}, response {:?}, max body {} bytes",
            settings.connect_timeout, settings.response_timeout, settings.max_body_bytes
        );

        Ok(Self {
            client,
            max_body_bytes: settings.max_body_bytes,
        })
    }

    fn too_large(&self) -> MarketDataError {
        MarketDataError::MalformedResponse(format!(
            "response body exceeds {} bytes",
            self.max_body_bytes
        ))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, MarketDataError> {
        let mut response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let headers = response.headers().clone();

        if let Some(length) = response.content_length() {
            if length > self.max_body_bytes as u64 {
                return Err(self.too_large());
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(self.too_large());
            }
            body.extend_from_slice(&chunk);
        }

        debug!("Upstream responded {} with {} bytes", status, body.len());
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
