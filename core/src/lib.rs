//! Request construction and response classification for endpoint-driven
//! HTTP clients.
//!
//! # Overview
//! Builds `HttpRequest` values from `Endpoint` descriptors and classifies
//! `HttpResponse` values without touching the network (host-does-IO
//! pattern). A transport executes the actual round-trip in between, which
//! keeps this crate deterministic and testable.
//!
//! # Design
//! - `RequestBuilder` is stateless; it holds only the shared `JsonCodec`.
//! - Parameters are encoded either into the query string (`encoding::url_encode`,
//!   via the flattening in `query`) or as a JSON body (`encoding::json_encode`),
//!   or replaced entirely by a caller-supplied body producer.
//! - `classify` maps each response to exactly one outcome per call shape:
//!   typed decode, completion-only, raw body, or download.

pub mod builder;
pub mod classify;
pub mod codec;
pub mod encoding;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod query;

pub use builder::RequestBuilder;
pub use classify::Download;
pub use codec::JsonCodec;
pub use endpoint::{BodyProducer, Endpoint, ParameterEncoding};
pub use error::NetworkError;
pub use crate::http::{HttpMethod, HttpRequest, HttpResponse, ResponseMetadata};
pub use url::Url;
