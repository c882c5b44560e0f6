//! Response classification.
//!
//! Each function consumes one `HttpResponse` and turns it into the outcome of
//! one call shape. The status is always checked first: a non-2xx response is
//! a `ServerError` carrying the raw body, and the body is never decoded.

use serde::de::DeserializeOwned;

use crate::codec::JsonCodec;
use crate::error::NetworkError;
use crate::http::{HttpResponse, ResponseMetadata};

/// Result of a download call: the raw bytes plus the response they came with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub data: Vec<u8>,
    pub metadata: ResponseMetadata,
}

/// Reject responses without a valid status or with a status outside 2xx.
pub fn check_status(response: HttpResponse) -> Result<HttpResponse, NetworkError> {
    match response.status {
        200..=299 => Ok(response),
        100..=599 => Err(NetworkError::ServerError {
            status: response.status,
            body: response.body,
        }),
        _ => Err(NetworkError::UnknownError),
    }
}

/// Typed path: decode the body of a 2xx response into `T`.
pub fn decode<T: DeserializeOwned>(
    response: HttpResponse,
    codec: &JsonCodec,
) -> Result<T, NetworkError> {
    let body = require_body(check_status(response)?.body)?;
    codec.decode(&body)
}

/// Completion-only path: any 2xx succeeds, the body is ignored.
pub fn completion(response: HttpResponse) -> Result<(), NetworkError> {
    check_status(response).map(|_| ())
}

/// Raw pass-through path used by uploads: the body of a 2xx response.
pub fn raw_body(response: HttpResponse) -> Result<Vec<u8>, NetworkError> {
    require_body(check_status(response)?.body)
}

/// Raw pass-through path used by downloads: body and response metadata.
pub fn download(response: HttpResponse) -> Result<Download, NetworkError> {
    let (metadata, body) = check_status(response)?.into_parts();
    Ok(Download {
        data: require_body(body)?,
        metadata,
    })
}

fn require_body(body: Option<Vec<u8>>) -> Result<Vec<u8>, NetworkError> {
    match body {
        Some(body) if !body.is_empty() => Ok(body),
        _ => Err(NetworkError::NoData),
    }
}
