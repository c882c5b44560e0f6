//! JSON serializer/deserializer shared by every call of a client.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::NetworkError;

/// Stateless JSON codec. One instance is configured per client and shared by
/// all of its calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    /// Pretty-print encoded bodies.
    pub pretty: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, NetworkError> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        encoded.map_err(|e| NetworkError::EncodingError(e.to_string()))
    }

    /// Decode `bytes` into `T`. The parse diagnostic is logged, not returned.
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, NetworkError> {
        serde_json::from_slice(bytes).map_err(|e| {
            debug!(error = %e, "response body did not match the requested type");
            NetworkError::DecodingError
        })
    }
}
