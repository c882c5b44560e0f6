//! Endpoint descriptors.
//!
//! An `Endpoint` describes one logical HTTP call: where it goes, which method
//! and headers it carries, and how its optional parameters are encoded. It is
//! read-only to the rest of the crate; `RequestBuilder` derives a fresh
//! `HttpRequest` from it for every call.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::error::NetworkError;
use crate::http::HttpMethod;

/// Caller-supplied body producer for `ParameterEncoding::Custom`.
pub type BodyProducer = Arc<dyn Fn() -> Option<Vec<u8>> + Send + Sync>;

/// How an endpoint's parameters end up in the request.
#[derive(Clone, Default)]
pub enum ParameterEncoding {
    /// Flatten parameters into the URL query string.
    #[default]
    Url,
    /// Serialize parameters as a JSON body.
    Json,
    /// Ignore parameters; the producer's output becomes the body.
    Custom(BodyProducer),
}

impl ParameterEncoding {
    pub fn custom<F>(producer: F) -> Self
    where
        F: Fn() -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        ParameterEncoding::Custom(Arc::new(producer))
    }
}

impl fmt::Debug for ParameterEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterEncoding::Url => f.write_str("Url"),
            ParameterEncoding::Json => f.write_str("Json"),
            ParameterEncoding::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Description of one HTTP call.
///
/// `P` is the parameter type; endpoints without parameters use `()`.
///
/// ```
/// use endpoint_core::{Endpoint, HttpMethod, ParameterEncoding};
/// use serde_json::json;
///
/// let endpoint = Endpoint::try_new("https://api.example.com/v1/", "items")
///     .unwrap()
///     .method(HttpMethod::Post)
///     .header("Accept", "application/json")
///     .parameters(json!({"name": "bolt"}))
///     .encoding(ParameterEncoding::Json);
/// assert_eq!(endpoint.path, "items");
/// ```
#[derive(Debug, Clone)]
pub struct Endpoint<P = ()> {
    pub base_url: Url,
    pub path: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub parameters: Option<P>,
    pub encoding: ParameterEncoding,
}

impl Endpoint<()> {
    /// A `GET` endpoint with no headers, no parameters, and URL encoding.
    pub fn new(base_url: Url, path: impl Into<String>) -> Self {
        Self {
            base_url,
            path: path.into(),
            method: HttpMethod::Get,
            headers: Vec::new(),
            parameters: None,
            encoding: ParameterEncoding::Url,
        }
    }

    /// Like `new`, parsing the base address first.
    pub fn try_new(base_url: &str, path: impl Into<String>) -> Result<Self, NetworkError> {
        let base_url =
            Url::parse(base_url).map_err(|e| NetworkError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self::new(base_url, path))
    }
}

impl<P> Endpoint<P> {
    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn encoding(mut self, encoding: ParameterEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Attach parameters, changing the parameter type.
    pub fn parameters<Q>(self, parameters: Q) -> Endpoint<Q> {
        Endpoint {
            base_url: self.base_url,
            path: self.path,
            method: self.method,
            headers: self.headers,
            parameters: Some(parameters),
            encoding: self.encoding,
        }
    }
}
