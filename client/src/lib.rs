//! Asynchronous, cancellable HTTP calls driven by `Endpoint` descriptors.
//!
//! # Overview
//! `ApiClient` builds each request with `endpoint-core`, hands it to a
//! [`Transport`] on a tokio task, and classifies the response into exactly
//! one outcome. Each operation returns a [`Call`] handle: await it for the
//! outcome, or cancel it to abort the in-flight request.
//!
//! # Design
//! - Transport is a trait seam; `ReqwestTransport` is the default and tests
//!   inject their own.
//! - Classification is shared by all four call shapes: transport failures
//!   are `NetworkError::Transport`, non-2xx responses are
//!   `NetworkError::ServerError` with the body kept.
//! - Logging goes through `tracing`; the crate never installs a subscriber.

pub mod api;
pub mod call;
pub mod config;
pub mod service;
pub mod transport;

pub use api::ApiClient;
pub use call::Call;
pub use config::ClientConfig;
pub use endpoint_core::{
    Download, Endpoint, HttpMethod, JsonCodec, NetworkError, ParameterEncoding, ResponseMetadata,
    Url,
};
pub use service::NetworkService;
pub use transport::{ReqwestTransport, Transport, TransportError};
