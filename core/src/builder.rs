//! Turns `Endpoint` descriptors into `HttpRequest` values.
//!
//! # Design
//! `RequestBuilder` holds only the `JsonCodec` and carries no mutable state
//! between calls, so one instance can be shared by any number of concurrent
//! calls. Building never touches the network; the caller executes the
//! returned request.

use serde::Serialize;

use crate::codec::JsonCodec;
use crate::encoding::{json_encode, url_encode};
use crate::endpoint::{Endpoint, ParameterEncoding};
use crate::error::NetworkError;
use crate::http::HttpRequest;

/// Stateless builder of requests from endpoints.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    codec: JsonCodec,
}

impl RequestBuilder {
    pub fn new(codec: JsonCodec) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &JsonCodec {
        &self.codec
    }

    /// Build a fresh request for `endpoint`.
    ///
    /// The path is resolved against the base address with standard URL
    /// resolution: `"items"` is relative to the base's last segment, `"/items"`
    /// replaces the base path, and an absolute URL replaces the base entirely.
    /// Header names or values that cannot be sent fail with `InvalidUrl`.
    pub fn build<P: Serialize>(
        &self,
        endpoint: &Endpoint<P>,
    ) -> Result<HttpRequest, NetworkError> {
        let url = endpoint.base_url.join(&endpoint.path).map_err(|e| {
            NetworkError::InvalidUrl(format!("{} + {}: {e}", endpoint.base_url, endpoint.path))
        })?;

        let mut request = HttpRequest::new(endpoint.method, url);
        request.headers = endpoint.headers.clone();

        let parameters = endpoint.parameters.as_ref();
        let request = match &endpoint.encoding {
            ParameterEncoding::Url => url_encode(request, parameters)?,
            ParameterEncoding::Json => json_encode(request, parameters, &self.codec)?,
            ParameterEncoding::Custom(producer) => {
                request.body = producer();
                request
            }
        };
        request.validate_headers()?;
        Ok(request)
    }
}
