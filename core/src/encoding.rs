//! Parameter encoders.
//!
//! Both encoders take a request by value and hand back the encoded request.
//! With no parameters the request is returned untouched. On failure the
//! request is consumed and only the error comes back; the endpoint it was
//! built from is never affected.

use serde::Serialize;

use crate::codec::JsonCodec;
use crate::error::NetworkError;
use crate::http::HttpRequest;
use crate::query;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Encode `parameters` into the request URL's query string.
///
/// The flattened items replace any query already on the URL. Items that
/// flatten to nothing clear the query.
pub fn url_encode<P: Serialize + ?Sized>(
    mut request: HttpRequest,
    parameters: Option<&P>,
) -> Result<HttpRequest, NetworkError> {
    let Some(parameters) = parameters else {
        return Ok(request);
    };

    let items = query::query_items(parameters)?;
    if items.is_empty() {
        request.url.set_query(None);
    } else {
        request
            .url
            .query_pairs_mut()
            .clear()
            .extend_pairs(items.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    Ok(request)
}

/// Encode `parameters` as a JSON body and mark the request as JSON.
pub fn json_encode<P: Serialize + ?Sized>(
    mut request: HttpRequest,
    parameters: Option<&P>,
    codec: &JsonCodec,
) -> Result<HttpRequest, NetworkError> {
    let Some(parameters) = parameters else {
        return Ok(request);
    };

    let body = codec.encode(parameters)?;
    request.body = Some(body);
    request.set_header(CONTENT_TYPE, APPLICATION_JSON);
    Ok(request)
}
