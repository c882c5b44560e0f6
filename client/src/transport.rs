//! The transport seam between calls and the network.
//!
//! A `Transport` executes one `HttpRequest` and reports exactly one terminal
//! event: a response or an error. Dropping the future returned by `send`
//! cancels the in-flight request.

use async_trait::async_trait;
use endpoint_core::{HttpMethod, HttpRequest, HttpResponse};
use reqwest::{Client, Method};
use thiserror::Error;
use tracing::trace;

use crate::config::ClientConfig;

/// Failures below the HTTP layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client construction failed: {0}")]
    Build(#[source] reqwest::Error),

    /// Connecting, sending, or reading the response failed.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A failure reported by a `Transport` implementation other than
    /// `ReqwestTransport`, which has no `reqwest::Error` to carry.
    #[error("{0}")]
    Other(String),
}

/// Executes requests. Implementations must be shareable across concurrent calls.
///
/// Implementations not built on reqwest report their failures as
/// [`TransportError::Other`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `Transport` backed by a pooled `reqwest::Client`.
///
/// Redirects are followed transparently; the reported response URL is the
/// final one.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] when the client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(TransportError::Build)?;
        Ok(Self { client })
    }

    /// Wrap an existing client, keeping its own settings.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.to_string();
        let mut builder = self.client.request(method(request.method), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|source| TransportError::Request {
            url: url.clone(),
            source,
        })?;

        let status = response.status().as_u16();
        let final_url = response.url().clone();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Request { url, source })?;
        trace!(status, bytes = body.len(), "transport received response");

        Ok(HttpResponse {
            status,
            url: final_url,
            headers,
            body: (!body.is_empty()).then(|| body.to_vec()),
        })
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}
