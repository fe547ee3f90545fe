// src/github/transport.rs
// =============================================================================
// The HTTP seam between the fetcher and the network.
//
// The fetcher only needs "GET this URL, give me the status and the body".
// Putting that behind a trait lets the tests script responses (and count the
// requests) without touching the network.
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use url::Url;

use super::endpoints::FetcherConfig;
use super::error::FetchError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: StatusCode,
    pub body: String,
}

/// Anything that can perform a GET request.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Only transport-level failures are errors; a 404 is still a reply.
    async fn get(&self, url: &Url) -> Result<HttpReply, FetchError>;
}

/// The real transport, backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    // GitHub rejects requests without a User-Agent, and the Accept header
    // pins the v3 JSON media type. No timeout override: reqwest's default applies.
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let client = Client::builder()
            .user_agent(config.user_agent())
            .default_headers(headers)
            .build()?;

        Ok(ReqwestTransport { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpReply, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(HttpReply { status, body })
    }
}
