//! HTTP types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and classifies `HttpResponse` values
//! without ever touching the network; a transport (the `endpoint-client`
//! crate, or a test harness) executes the actual I/O.
//!
//! The request URL is a parsed `Url`, so a request without a resolvable URL
//! cannot be constructed. Bodies are raw bytes because uploads and downloads
//! carry arbitrary payloads.

use std::fmt;

use http::header::{HeaderName, HeaderValue};
use url::Url;

use crate::error::NetworkError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Upper-case wire token, e.g. `"PATCH"`.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built fresh for every call by `RequestBuilder::build`; never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Replace the header named `name` (ignoring case), or append it.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some(slot) => slot.1 = value,
            None => self.headers.push((name.to_string(), value)),
        }
    }

    /// Reject header names or values that cannot go on the wire.
    pub fn validate_headers(&self) -> Result<(), NetworkError> {
        for (name, value) in &self.headers {
            HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| NetworkError::InvalidUrl(format!("invalid header name {name:?}")))?;
            HeaderValue::from_str(value).map_err(|_| {
                NetworkError::InvalidUrl(format!("invalid value for header {name}"))
            })?;
        }
        Ok(())
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a transport after executing an `HttpRequest`, then handed to
/// the functions in `classify`. An empty body is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Split off the body, keeping the rest as `ResponseMetadata`.
    pub fn into_parts(self) -> (ResponseMetadata, Option<Vec<u8>>) {
        let metadata = ResponseMetadata {
            status: self.status,
            url: self.url,
            headers: self.headers,
        };
        (metadata, self.body)
    }
}

/// Status line and headers of a response, without its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMetadata {
    pub status: u16,
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl ResponseMetadata {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
