//! Client configuration.
//!
//! Timeouts are enforced by the transport; calls add no timeout of their own.

use std::time::Duration;

use endpoint_core::JsonCodec;
use serde::Deserialize;

pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent` sent by `ReqwestTransport`.
pub const USER_AGENT: &str = concat!("endpoint-client/", env!("CARGO_PKG_VERSION"));

/// Settings for an `ApiClient` built with `ApiClient::new`.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial config section is enough.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub pretty_json: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: CONNECT_TIMEOUT_SECS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
            pretty_json: false,
        }
    }
}

impl ClientConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Codec used for JSON bodies and typed responses.
    pub fn codec(&self) -> JsonCodec {
        JsonCodec {
            pretty: self.pretty_json,
        }
    }
}
